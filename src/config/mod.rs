//! Configuration module for serverstore
//!
//! Resolution order:
//! 1. Environment variables (SERVERSTORE_*) (highest priority)
//! 2. Project config (`serverstore.toml` in the project root)
//! 3. User config (`<config dir>/serverstore/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    ENV_LOCK, ENV_PATH, PROJECT_CONFIG_FILE,
};
pub use types::{Config, StorageConfig, DEFAULT_REGISTRY_FILE};
