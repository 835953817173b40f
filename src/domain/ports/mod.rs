//! Domain Ports (Interfaces)
//!
//! Infrastructure layer provides concrete implementations.

pub mod registry_repository;

pub use registry_repository::{RegistryError, RegistryRepository};
