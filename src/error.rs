//! Error types for serverstore
//!
//! Validation and not-found errors are expected outcomes a caller can act
//! on. Registry errors mean durable storage could not be read or written;
//! most callers should treat them as fatal.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::ValidationError;
use crate::domain::ports::RegistryError;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Record rejected before anything was touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("server '{name}' does not exist in store")]
    NotFound { name: String },

    /// I/O failure or corrupted persistence file
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl StoreError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
