//! Domain Policies
//!
//! Business rules that govern which records may enter the registry.

mod validation;

pub use validation::{is_valid_ip, validate_server, ServerField, ValidationError};
