//! Registry entity
//!
//! The authoritative in-memory set of servers, keyed by name. The registry
//! owns its records; callers only ever get copies back.

use std::collections::BTreeMap;

use super::Server;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    servers: BTreeMap<String, Server>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record keyed by `server.name`.
    ///
    /// Re-adding a name overwrites: the registry holds current desired state,
    /// not a history. Returns the record that was replaced, if any.
    pub fn upsert(&mut self, server: Server) -> Option<Server> {
        self.servers.insert(server.name.clone(), server)
    }

    /// Remove a record. `None` means no server had that name.
    pub fn delete(&mut self, name: &str) -> Option<Server> {
        self.servers.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Server> {
        self.servers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.servers.contains_key(name)
    }

    /// Copies of every record, ordered by name.
    pub fn list(&self) -> Vec<Server> {
        self.servers.values().cloned().collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.servers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Server> {
        self.servers.values()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
