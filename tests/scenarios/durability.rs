//! Scenario: crashes, corruption and failing saves.

use serverstore::infrastructure::fs::stage;
use serverstore::{RegistryError, ServerStore, StoreError};

use crate::common::*;

/// A save that dies after staging but before the rename must leave the old
/// document readable.
#[test]
fn interrupted_save_keeps_previous_file() {
    let env = TestEnv::new();
    let store = env.open();
    store.add_server(alpha()).unwrap();
    let before = env.read_registry();

    let staged = stage(&env.registry_path(), b"{\"beta\": {\"name\": \"be").unwrap();
    drop(staged);

    assert_eq!(env.read_registry(), before);
    let reopened = env.open();
    assert_eq!(reopened.get_all_servers(), vec![alpha()]);
    assert!(env
        .entries()
        .iter()
        .all(|name| !name.ends_with(".tmp")));
}

#[test]
fn corrupted_registry_is_an_error_not_an_empty_store() {
    let env = TestEnv::with_registry("this is not json");

    let err = ServerStore::load(env.registry_path()).err().unwrap();

    assert!(matches!(
        err,
        StoreError::Registry(RegistryError::Corrupted { .. })
    ));
    assert!(err.to_string().contains("registry file corrupted"));
    assert_eq!(env.read_registry(), "this is not json");
}

#[test]
fn zero_length_registry_loads_empty() {
    let env = TestEnv::with_registry("");
    assert!(env.open().is_empty());
}

#[test]
fn hand_written_registry_is_loaded() {
    let env = TestEnv::with_registry(
        r#"{"beta":{"name":"beta","ip_addr":"127.0.0.2","working_dir":"/srv/beta","local":false}}"#,
    );

    let store = env.open();

    assert_eq!(store.get_server_by_name("beta").unwrap(), beta());
}

#[cfg(unix)]
#[test]
fn failed_save_leaves_memory_matching_disk() {
    use std::fs;

    let env = TestEnv::new();
    let store = env.open();
    store.add_server(alpha()).unwrap();
    let before = env.read_registry();

    // Swap the file for a directory so the final rename cannot succeed.
    fs::rename(env.registry_path(), env.root().join("parked.json")).unwrap();
    fs::create_dir(env.registry_path()).unwrap();

    let err = store.add_server(beta()).unwrap_err();
    assert!(matches!(err, StoreError::Registry(RegistryError::Io { .. })));
    assert_eq!(store.get_all_servers(), vec![alpha()]);

    let err = store.remove_server("alpha").unwrap_err();
    assert!(matches!(err, StoreError::Registry(RegistryError::Io { .. })));
    assert_eq!(store.get_all_servers(), vec![alpha()]);

    fs::remove_dir(env.registry_path()).unwrap();
    fs::rename(env.root().join("parked.json"), env.registry_path()).unwrap();
    assert_eq!(env.read_registry(), before);
}
