//! JSON Registry Repository
//!
//! Persists the server registry as a single JSON object keyed by server name:
//!
//! ```json
//! {
//!   "alpha": { "name": "alpha", "ip_addr": "127.0.0.1", "working_dir": "/srv/alpha", "local": false }
//! }
//! ```
//!
//! The file is only opened for the duration of a load or save. File lists
//! are never written.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DEFAULT_REGISTRY_FILE;
use crate::domain::entities::{Registry, Server};
use crate::domain::policies::validate_server;
use crate::domain::ports::{RegistryError, RegistryRepository};
use crate::infrastructure::fs::atomic;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonServerEntry {
    name: String,
    ip_addr: String,
    working_dir: String,
    #[serde(default)]
    local: bool,
}

type JsonRegistry = BTreeMap<String, JsonServerEntry>;

pub struct JsonRegistryRepository {
    path: PathBuf,
    locking: bool,
}

impl JsonRegistryRepository {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_REGISTRY_FILE)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            locking: true,
        }
    }

    /// Toggle the advisory lock on the sibling `.lock` file.
    pub fn with_locking(mut self, locking: bool) -> Self {
        self.locking = locking;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn lock(&self, exclusive: bool) -> Result<Option<fs::File>, RegistryError> {
        if !self.locking {
            return Ok(None);
        }

        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| RegistryError::io("create directory for", parent, e))?;
        }

        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| RegistryError::io("open lock file", &lock_path, e))?;

        let locked = if exclusive {
            lock_file.lock_exclusive()
        } else {
            lock_file.lock_shared()
        };
        locked.map_err(|e| RegistryError::io("lock", &lock_path, e))?;

        debug!(path = %lock_path.display(), exclusive, "acquired registry lock");
        Ok(Some(lock_file))
    }

    fn load_from_disk(&self) -> Result<Registry, RegistryError> {
        if !self.path.exists() {
            create_empty(&self.path)?;
            debug!(path = %self.path.display(), "created empty registry file");
            return Ok(Registry::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| RegistryError::io("read", &self.path, e))?;

        if content.is_empty() {
            return Ok(Registry::new());
        }

        decode_registry(&content).map_err(|message| RegistryError::Corrupted {
            path: self.path.clone(),
            message,
        })
    }

    fn save_to_disk(&self, registry: &Registry) -> Result<(), RegistryError> {
        let content = encode_registry(registry)?;
        atomic::atomic_write(&self.path, content.as_bytes())
            .map_err(|e| RegistryError::io("atomically replace", &self.path, e))
    }
}

impl Default for JsonRegistryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryRepository for JsonRegistryRepository {
    fn load(&self) -> Result<Registry, RegistryError> {
        let lock_file = self.lock(false)?;
        let result = self.load_from_disk();
        if let Some(lock_file) = lock_file {
            let _ = lock_file.unlock();
        }

        if let Ok(registry) = &result {
            debug!(path = %self.path.display(), servers = registry.len(), "loaded registry");
        }
        result
    }

    fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        let lock_file = self.lock(true)?;
        let result = self.save_to_disk(registry);
        if let Some(lock_file) = lock_file {
            let _ = lock_file.unlock();
        }

        if result.is_ok() {
            debug!(path = %self.path.display(), servers = registry.len(), "saved registry");
        }
        result
    }
}

/// First-run bootstrap: an empty file, readable only by the owner.
fn create_empty(path: &Path) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| RegistryError::io("create directory for", parent, e))?;
    }

    let mut options = fs::OpenOptions::new();
    options.create(true).truncate(false).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
        .open(path)
        .map(drop)
        .map_err(|e| RegistryError::io("create", path, e))
}

/// Decode a persisted document.
///
/// Every entry must sit under its own name and pass validation, so a
/// hand-edited file cannot smuggle invalid records into the registry.
pub fn decode_registry(content: &str) -> Result<Registry, String> {
    let json: JsonRegistry = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let mut registry = Registry::new();
    for (key, entry) in json {
        if key != entry.name {
            return Err(format!(
                "entry '{key}' holds a server named '{}'",
                entry.name
            ));
        }

        let server = from_json(entry);
        validate_server(&server).map_err(|e| format!("entry '{key}': {e}"))?;
        registry.upsert(server);
    }
    Ok(registry)
}

/// Encode the registry as pretty JSON with a trailing newline, keys sorted.
pub fn encode_registry(registry: &Registry) -> Result<String, RegistryError> {
    let json: JsonRegistry = registry
        .iter()
        .map(|s| (s.name.clone(), to_json(s)))
        .collect();

    let mut content =
        serde_json::to_string_pretty(&json).map_err(|e| RegistryError::Serialization {
            message: e.to_string(),
        })?;
    content.push('\n');
    Ok(content)
}

fn from_json(entry: JsonServerEntry) -> Server {
    Server {
        name: entry.name,
        ip_addr: entry.ip_addr,
        working_dir: entry.working_dir,
        file_list: Vec::new(),
        is_local: entry.local,
    }
}

fn to_json(server: &Server) -> JsonServerEntry {
    JsonServerEntry {
        name: server.name.clone(),
        ip_addr: server.ip_addr.clone(),
        working_dir: server.working_dir.clone(),
        local: server.is_local,
    }
}
