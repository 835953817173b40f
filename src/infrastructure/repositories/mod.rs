//! Repository Implementations

mod registry;

pub use registry::{decode_registry, encode_registry, JsonRegistryRepository};
