//! serverstore - durable registry of media servers
//!
//! Keeps a small set of named hosts (address, content root, local flag) in a
//! JSON file. Every write is validated, serialized behind one lock, and
//! replaces the file atomically.
//!
//! ```no_run
//! use serverstore::{Server, ServerStore};
//!
//! let store = ServerStore::load("servers.json")?;
//! store.add_server(Server::new("alpha", "127.0.0.1", "/srv/alpha"))?;
//! assert_eq!(store.get_server_by_name("alpha")?.working_dir, "/srv/alpha");
//! # Ok::<(), serverstore::StoreError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::ServerStore;
pub use config::Config;
pub use domain::entities::{Registry, Server};
pub use domain::policies::{validate_server, ServerField, ValidationError};
pub use domain::ports::{RegistryError, RegistryRepository};
pub use error::{StoreError, StoreResult};
pub use infrastructure::JsonRegistryRepository;
