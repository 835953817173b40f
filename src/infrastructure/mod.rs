//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file I/O lives here.
//!
//! ## Structure
//!
//! - `fs/` - Crash-consistent file writes
//! - `repositories/` - Repository implementations (JSON registry)

pub mod fs;
pub mod repositories;

pub use repositories::JsonRegistryRepository;
