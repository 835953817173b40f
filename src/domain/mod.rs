//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Server records and the registry that owns them
//! - `policies/` - Admission rules (validation)
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
