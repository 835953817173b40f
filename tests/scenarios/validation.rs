//! Scenario: invalid records never reach memory or disk.

use serverstore::{Server, ServerField, StoreError};

use crate::common::*;

fn assert_rejected(server: Server, field: ServerField) {
    let env = TestEnv::new();
    let store = env.open();
    store.add_server(alpha()).unwrap();
    let before = env.read_registry();

    let err = store.add_server(server).unwrap_err();

    match err {
        StoreError::Validation(e) => assert_eq!(e.field, field),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.get_all_servers(), vec![alpha()]);
    assert_eq!(env.read_registry(), before);
}

#[test]
fn empty_name_rejected() {
    assert_rejected(Server::new("", "0.0.0.0", "/valid/path"), ServerField::Name);
}

#[test]
fn bad_ips_rejected() {
    for (ip, why) in BAD_IPS {
        let env = TestEnv::new();
        let store = env.open();

        let err = store
            .add_server(Server::new("test_server", *ip, "/valid"))
            .err()
            .unwrap_or_else(|| panic!("should not be able to save because: {why}"));

        assert!(err.is_validation(), "{why}: {err}");
        assert!(store.is_empty());
        assert_eq!(env.read_registry(), "");
    }
}

#[test]
fn bad_ip_leaves_existing_record_alone() {
    assert_rejected(
        Server::new("alpha", "0.0.0.256", "/elsewhere"),
        ServerField::IpAddress,
    );
}

#[test]
fn empty_working_dir_rejected() {
    assert_rejected(Server::new("ValidName", "0.0.0.0", ""), ServerField::WorkingDir);
}
