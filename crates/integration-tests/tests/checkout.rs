//! Checkout through the scripted payment gateway.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use ecosankalp_core::{OrderStatus, Price, ProductId, UserRole};
use ecosankalp_integration_tests::{card, citizen_store, file_store, good_card, password};
use ecosankalp_store::{CheckoutError, DomainStore, ScriptedGateway, StoreError};

fn with_cart() -> DomainStore {
    let mut store = citizen_store("buyer@example.com").unwrap();
    store
        .add_catalog_product_to_cart(&ProductId::new("p3"), false)
        .unwrap();
    store
        .add_catalog_product_to_cart(&ProductId::new("p6"), true)
        .unwrap();
    store
}

#[tokio::test]
async fn test_authorized_payment_places_order() {
    let mut store = with_cart();
    let points = store.user().unwrap().green_points;
    let gateway = ScriptedGateway::new(Duration::from_millis(5));

    let order = store.checkout(&gateway, &good_card()).await.unwrap();

    assert_eq!(order.total, Price::inr(598));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.status, OrderStatus::Processing);
    assert!(store.cart().is_empty());
    assert_eq!(store.orders_for_user(&order.user_id).count(), 1);
    // redemption has no pricing or balance effect
    assert_eq!(store.user().unwrap().green_points, points);
}

#[tokio::test]
async fn test_declined_payment_changes_nothing() {
    let mut store = with_cart();
    let cart_before = store.cart().to_vec();

    let err = store
        .checkout(&ScriptedGateway::instant(), &card("", "4111111111111111"))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::PaymentDeclined(_)));
    assert_eq!(store.cart(), cart_before.as_slice());
    assert_eq!(store.orders().count(), 0);
}

#[tokio::test]
async fn test_checkout_requires_sign_in() {
    let mut store = DomainStore::in_memory();
    store
        .add_catalog_product_to_cart(&ProductId::new("p1"), false)
        .unwrap();

    let err = store
        .checkout(&ScriptedGateway::instant(), &good_card())
        .await
        .unwrap_err();

    assert_eq!(err, CheckoutError::Store(StoreError::AuthRequired));
    assert_eq!(store.cart().len(), 1);
}

#[tokio::test]
async fn test_checkout_persists_order_and_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let tracking_number = {
        let mut store = file_store(dir.path());
        store
            .login("buyer@example.com", &password(), UserRole::Citizen)
            .unwrap();
        store
            .add_catalog_product_to_cart(&ProductId::new("p1"), false)
            .unwrap();
        store
            .checkout(&ScriptedGateway::instant(), &good_card())
            .await
            .unwrap()
            .tracking_number
    };

    let store = file_store(dir.path());
    assert!(store.cart().is_empty());
    assert!(store.order_by_tracking_number(&tracking_number).is_some());
}
