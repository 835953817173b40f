//! RegistryRepository port
//!
//! Durable storage for the server registry. The default implementation is
//! the JSON file at `servers.json`.

use std::io;
use std::path::PathBuf;

use crate::domain::entities::Registry;

pub trait RegistryRepository: Send + Sync {
    /// Read the whole registry from storage.
    fn load(&self) -> Result<Registry, RegistryError>;

    /// Replace the stored registry with `registry`. Must be all-or-nothing:
    /// on error the previously stored registry is still intact.
    fn save(&self, registry: &Registry) -> Result<(), RegistryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize registry: {message}")]
    Serialization { message: String },

    #[error(
        "registry file corrupted: {path}\n  → Fix: repair the JSON by hand or move the file aside and re-add servers\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}

impl RegistryError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
