//! Server validation policy
//!
//! Admission rules a record must pass before it may enter the registry.
//! Pure functions: no I/O, no mutation.

use std::fmt;
use std::net::IpAddr;

use crate::domain::entities::Server;

/// The server field a validation rule applies to.
///
/// Displays as the field's name in the persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerField {
    Name,
    IpAddress,
    WorkingDir,
}

impl fmt::Display for ServerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerField::Name => "name",
            ServerField::IpAddress => "ip_addr",
            ServerField::WorkingDir => "working_dir",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid server {field}: {reason}")]
pub struct ValidationError {
    pub field: ServerField,
    pub reason: &'static str,
}

impl ValidationError {
    fn new(field: ServerField, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Check a candidate record. The first failing rule wins.
pub fn validate_server(server: &Server) -> Result<(), ValidationError> {
    if server.name.is_empty() {
        return Err(ValidationError::new(
            ServerField::Name,
            "server must have a name",
        ));
    }

    if !is_valid_ip(&server.ip_addr) {
        return Err(ValidationError::new(
            ServerField::IpAddress,
            "not a valid IPv4 or IPv6 address",
        ));
    }

    if server.working_dir.is_empty() {
        return Err(ValidationError::new(
            ServerField::WorkingDir,
            "working directory cannot be empty",
        ));
    }

    Ok(())
}

/// Accepts dotted-quad IPv4 and any textual IPv6 form, including
/// IPv4-mapped addresses. Surrounding whitespace is not tolerated.
pub fn is_valid_ip(candidate: &str) -> bool {
    candidate.parse::<IpAddr>().is_ok()
}
