//! Configuration module for testrun
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TESTRUN_*)
//! 3. Project config (./testrun.toml)
//! 4. User config (<config_dir>/testrun/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DocumentConfig, SourceConfig, UiConfig};
