//! Configuration loaded from `<config_dir>/prodman/config.toml`.
//!
//! Every field has a default, so a missing file (or a missing section) yields
//! a working setup pointed at the local Products service.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig, DEFAULT_BASE_URL};
