//! Server entity
//!
//! A named host that produces and/or consumes media content.

/// One managed host.
///
/// `file_list` is a snapshot taken by whoever built the record (usually a
/// directory scan). It is never persisted: its accuracy can only be trusted
/// right after a fresh scan, so a reloaded server always has an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Server {
    pub name: String,
    pub ip_addr: String,
    /// Content root on the host, absolute by convention.
    pub working_dir: String,
    pub file_list: Vec<String>,
    pub is_local: bool,
}

impl Server {
    /// Create a remote server record. Nothing is saved until the record is
    /// handed to a store.
    pub fn new(
        name: impl Into<String>,
        ip_addr: impl Into<String>,
        working_dir: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ip_addr: ip_addr.into(),
            working_dir: working_dir.into(),
            file_list: Vec::new(),
            is_local: false,
        }
    }

    /// Mark this record as describing the host the process runs on.
    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }

    pub fn with_file_list(mut self, files: Vec<String>) -> Self {
        self.file_list = files;
        self
    }

    /// The record as it looks after a round trip through storage.
    pub fn without_file_list(&self) -> Self {
        Self {
            file_list: Vec::new(),
            ..self.clone()
        }
    }
}
