//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

use super::loader::{self, ConfigWarning};

/// Default persistence file, relative to the working directory.
pub const DEFAULT_REGISTRY_FILE: &str = "servers.json";

/// Where and how the registry is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Take the advisory lock on `<path>.lock` around every load and save
    #[serde(default = "default_true")]
    pub lock: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            lock: default_true(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_REGISTRY_FILE)
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StoreResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StoreResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SERVERSTORE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Persistence file, resolved against `base` when relative.
    pub fn registry_path(&self, base: &Path) -> PathBuf {
        if self.storage.path.is_absolute() {
            self.storage.path.clone()
        } else {
            base.join(&self.storage.path)
        }
    }
}
