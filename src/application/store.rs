//! Server Store
//!
//! The validated CRUD entry point. Every mutation runs
//! validate → registry update → durable save under one lock, and rolls the
//! in-memory registry back if the save fails, so memory and disk agree
//! after every call.
//!
//! A `ServerStore` only exists after a successful load, and `close` consumes
//! it, so there is no way to call into a store that is not loaded.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::config::Config;
use crate::domain::entities::{Registry, Server};
use crate::domain::policies::validate_server;
use crate::domain::ports::RegistryRepository;
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::repositories::JsonRegistryRepository;

pub struct ServerStore {
    repository: Arc<dyn RegistryRepository>,
    registry: Mutex<Registry>,
}

impl ServerStore {
    /// Open the JSON registry at `path`, creating it on first run.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_repository(Arc::new(JsonRegistryRepository::with_path(path)))
    }

    /// Open the registry described by `config`.
    pub fn open(config: &Config) -> StoreResult<Self> {
        let repository = JsonRegistryRepository::with_path(config.storage.path.clone())
            .with_locking(config.storage.lock);
        Self::with_repository(Arc::new(repository))
    }

    /// Hydrate a store from any repository. This is the only load.
    pub fn with_repository(repository: Arc<dyn RegistryRepository>) -> StoreResult<Self> {
        let registry = repository.load()?;
        info!(servers = registry.len(), "server store loaded");
        Ok(Self {
            repository,
            registry: Mutex::new(registry),
        })
    }

    /// Validate and persist `server`, replacing any record with its name.
    pub fn add_server(&self, server: Server) -> StoreResult<()> {
        validate_server(&server)?;

        let name = server.name.clone();
        let mut registry = self.lock();
        let previous = registry.upsert(server);

        if let Err(e) = self.repository.save(&registry) {
            warn!(server = %name, error = %e, "save failed, rolling back add");
            match previous {
                Some(previous) => {
                    registry.upsert(previous);
                }
                None => {
                    registry.delete(&name);
                }
            }
            return Err(e.into());
        }

        info!(server = %name, replaced = previous.is_some(), "server added");
        Ok(())
    }

    /// Remove the named server. Removing an unknown name is `NotFound` and
    /// touches nothing on disk.
    pub fn remove_server(&self, name: &str) -> StoreResult<()> {
        let mut registry = self.lock();
        let removed = registry
            .delete(name)
            .ok_or_else(|| StoreError::not_found(name))?;

        if let Err(e) = self.repository.save(&registry) {
            warn!(server = %name, error = %e, "save failed, rolling back remove");
            registry.upsert(removed);
            return Err(e.into());
        }

        info!(server = %name, "server removed");
        Ok(())
    }

    /// Copies of every server, ordered by name.
    pub fn get_all_servers(&self) -> Vec<Server> {
        self.lock().list()
    }

    pub fn get_server_by_name(&self, name: &str) -> StoreResult<Server> {
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Tear the store down. Everything is already on disk; this only drops
    /// the in-memory registry and the repository handle.
    pub fn close(self) {
        info!("server store closed");
    }

    // A mutation that fails restores the previous state before releasing the
    // guard, so the data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
