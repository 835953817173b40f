//! Isolated on-disk environment for store tests.

use std::fs;
use std::path::{Path, PathBuf};

use serverstore::ServerStore;
use tempfile::TempDir;

pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Start with `content` already on disk.
    pub fn with_registry(content: &str) -> Self {
        let env = Self::new();
        fs::write(env.registry_path(), content).unwrap();
        env
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_path(&self) -> PathBuf {
        self.dir.path().join("servers.json")
    }

    pub fn open(&self) -> ServerStore {
        ServerStore::load(self.registry_path()).unwrap()
    }

    pub fn read_registry(&self) -> String {
        fs::read_to_string(self.registry_path()).unwrap()
    }

    pub fn registry_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_registry()).unwrap()
    }

    /// Top-level keys of the persisted document.
    pub fn persisted_names(&self) -> Vec<String> {
        match self.registry_json() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("registry is not an object: {other}"),
        }
    }

    /// Files in the environment directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(self.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
