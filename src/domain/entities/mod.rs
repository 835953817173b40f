//! Domain Entities
//!
//! - `Server` - One managed host
//! - `Registry` - All servers, keyed by name

mod registry;
mod server;

pub use registry::Registry;
pub use server::Server;
