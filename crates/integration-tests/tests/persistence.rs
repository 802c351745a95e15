//! Rehydration from file storage and storage failure handling.

#![allow(clippy::unwrap_used)]

use std::fs;

use ecosankalp_core::{OrderStatus, ProductId, QueryId, QueryStatus, UserRole};
use ecosankalp_integration_tests::{file_store, password};
use ecosankalp_store::models::QueryDraft;
use ecosankalp_store::storage::Slot;
use ecosankalp_store::{DomainStore, KeyValueStore, StorageError, StoreConfig};

#[test]
fn test_restart_restores_every_slot() {
    let dir = tempfile::tempdir().unwrap();

    let (user, order_id, query_id) = {
        let mut store = file_store(dir.path());
        let user = store
            .login("jane.doe@example.com", &password(), UserRole::Citizen)
            .unwrap();
        store
            .add_catalog_product_to_cart(&ProductId::new("p2"), true)
            .unwrap();
        let items = store.cart().to_vec();
        let order = store.create_order(&user.id, &items).unwrap();
        store.update_order_status(&order.id, OrderStatus::Shipped).unwrap();
        let query = store
            .add_query(QueryDraft {
                name: "Jane".to_owned(),
                email: "jane.doe@example.com".to_owned(),
                subject: "Bin request".to_owned(),
                message: "Please send a green bin.".to_owned(),
            })
            .unwrap();
        store.close_query(&QueryId::new("q1"));
        (user, order.id, query.id)
    };

    let store = file_store(dir.path());

    assert_eq!(store.user(), Some(&user));
    assert_eq!(store.cart().len(), 1);
    assert!(store.cart().first().unwrap().use_green_points);
    assert_eq!(store.order(&order_id).unwrap().status, OrderStatus::Shipped);
    assert_eq!(store.query(&query_id).unwrap().status, QueryStatus::Open);
    assert_eq!(
        store.query(&QueryId::new("q1")).unwrap().status,
        QueryStatus::Closed
    );
    assert_eq!(store.queries().count(), 3);
    assert!(!store.is_persistence_degraded());
}

#[test]
fn test_logout_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = file_store(dir.path());
        store
            .login("crew@example.com", &password(), UserRole::Worker)
            .unwrap();
        store.logout();
    }
    let store = file_store(dir.path());
    assert!(store.user().is_none());
    assert!(store.cart().is_empty());
}

#[test]
fn test_corrupt_slots_fall_back_independently() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = file_store(dir.path());
        store
            .login("jane@example.com", &password(), UserRole::Citizen)
            .unwrap();
        store
            .add_catalog_product_to_cart(&ProductId::new("p1"), false)
            .unwrap();
        store.close_query(&QueryId::new("q1"));
    }

    // garbage in one slot, a future schema in another
    fs::write(dir.path().join("es_cart.json"), "{ not json").unwrap();
    fs::write(
        dir.path().join("es_queries.json"),
        r#"{"version": 99, "data": []}"#,
    )
    .unwrap();

    let store = file_store(dir.path());

    assert!(store.user().is_some());
    assert!(store.cart().is_empty());
    assert_eq!(store.queries().count(), 2);
    assert_eq!(store.open_query_count(), 2);
    assert_eq!(store.orders().count(), 0);
}

#[test]
fn test_slot_payloads_are_versioned_envelopes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(dir.path());
    store
        .login("jane@example.com", &password(), UserRole::Citizen)
        .unwrap();

    let raw = fs::read_to_string(dir.path().join(format!("{}.json", Slot::User.key()))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["data"]["name"], "Jane");
    assert_eq!(value["data"]["greenPoints"], 350);
}

/// Backend that accepts reads and refuses every write.
struct ReadOnlyStorage;

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_owned()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_owned()))
    }
}

#[test]
fn test_write_failure_keeps_session_running_in_memory() {
    let mut store = DomainStore::load(ReadOnlyStorage, &StoreConfig::default());

    let user = store
        .login("jane@example.com", &password(), UserRole::Citizen)
        .unwrap();
    assert!(store.is_persistence_degraded());

    store
        .add_catalog_product_to_cart(&ProductId::new("p4"), false)
        .unwrap();
    let items = store.cart().to_vec();
    store.create_order(&user.id, &items).unwrap();

    assert_eq!(store.user(), Some(&user));
    assert_eq!(store.orders().count(), 1);
}
