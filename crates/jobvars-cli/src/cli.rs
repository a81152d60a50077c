use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobvars_model::Variable;

/// Parse, filter and expand job variables.
#[derive(Debug, Parser)]
#[command(name = "jobvars", version, about, long_about = None)]
pub struct Cli {
    /// JSON config file with `logger` and `expansion` sections.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter expression, overrides config and JOBVARS_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (text|json|journald), overrides config and JOBVARS_LOG_FORMAT.
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// JSON array of variables as received from a job request.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Extra variable appended after the file's entries.
    #[arg(long = "var", value_name = "KEY=VALUE", global = true)]
    pub vars: Vec<Variable>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every variable as KEY=VALUE.
    Render {
        /// Only public or internal variables.
        #[arg(long)]
        visible: bool,
    },
    /// Expand placeholders and print the result.
    Expand {
        /// Only public or internal variables (filtered before expansion).
        #[arg(long)]
        visible: bool,
        /// Extra string to interpolate with the expanded values.
        #[arg(short, long = "template", value_name = "TEMPLATE")]
        templates: Vec<String>,
    },
    /// Print the value of the first variable with KEY.
    Get { key: String },
}
