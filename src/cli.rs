use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Terminal manager for the products of a REST inventory service.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "prodman", version)]
pub struct Cli {
    /// Base URL of the Products service (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to the config file (default: <config_dir>/prodman/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the diagnostic log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "prodman=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file named on the command line, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Command-line flags win over file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
