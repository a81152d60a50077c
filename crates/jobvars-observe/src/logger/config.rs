use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{LoggerError, LoggerFormat, LoggerLevel};

/// Environment variable overriding [`LoggerConfig::level`].
pub const ENV_LOG_LEVEL: &str = "JOBVARS_LOG";
/// Environment variable overriding [`LoggerConfig::format`].
pub const ENV_LOG_FORMAT: &str = "JOBVARS_LOG_FORMAT";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"info"`, `"jobvars_model=trace,warn"`).
    pub level: LoggerLevel,
    /// Include module targets in each record.
    pub with_targets: bool,
    /// Colored text output, applied only when stderr is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: false,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Apply [`ENV_LOG_LEVEL`] and [`ENV_LOG_FORMAT`] from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, LoggerError> {
        let level = std::env::var(ENV_LOG_LEVEL).ok();
        let format = std::env::var(ENV_LOG_FORMAT).ok();
        self.with_overrides(level.as_deref(), format.as_deref())
    }

    /// Replace level and/or format when a value is given.
    pub fn with_overrides(
        mut self,
        level: Option<&str>,
        format: Option<&str>,
    ) -> Result<Self, LoggerError> {
        if let Some(level) = level {
            self.level = level.parse()?;
        }
        if let Some(format) = format {
            self.format = format.parse()?;
        }
        Ok(self)
    }

    /// Color is used only if enabled and stderr is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}
