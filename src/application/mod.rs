//! Application Layer
//!
//! Use cases that orchestrate domain rules and infrastructure.
//!
//! - `ServerStore` - Validated, durable CRUD over the server registry

pub mod store;

pub use store::ServerStore;
