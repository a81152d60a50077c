use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use jobvars_model::ExpansionRules;
use jobvars_observe::LoggerConfig;

/// File-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub expansion: ExpansionRules,
}

impl AppConfig {
    /// Read the config file, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}
