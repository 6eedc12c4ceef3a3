//! Runtime configuration from the environment.
//!
//! `main` loads `.env` with `dotenv` before calling [`Config::from_env`];
//! command line flags override what the environment sets.

use crate::error::{CidrError, Result};
use crate::output::OutputFormat;
use clap::ValueEnum;

/// Environment variable selecting the output format (`plain`, `csv`, `json`).
pub const FORMAT_VAR: &str = "CIDR_MERGE_FORMAT";
/// Environment variable pointing at the log4rs configuration file.
pub const LOG_CONFIG_VAR: &str = "CIDR_MERGE_LOG_CONFIG";
/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = OutputFormat::from_str(format.trim(), true)
                .map_err(|_| CidrError::Config(format!("{FORMAT_VAR}='{format}'")))?;
        }
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_config = path;
        }

        Ok(config)
    }

    /// Apply a command line override of the output format.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Config {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
