//! End-to-end journeys through the domain store.

#![allow(clippy::unwrap_used)]

use ecosankalp_core::{
    OrderStatus, Price, ProductCategory, ProductId, QueryId, QueryStatus, ReportStatus, UserId,
};
use ecosankalp_integration_tests::{citizen_store, report_draft, training_chain};
use ecosankalp_store::models::{CartItem, Product};
use ecosankalp_store::models::order::is_well_formed_tracking_number;
use ecosankalp_store::{DomainStore, StoreError};

fn product(id: &str, rupees: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: String::new(),
        price: Price::inr(rupees),
        green_points_price: 0,
        image: "/placeholder.svg".to_owned(),
        category: ProductCategory::Accessories,
        in_stock: true,
    }
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_submitted_report_is_pending_and_rewarded() {
    let mut store = citizen_store("warrior@example.com").unwrap();
    let before = store.user().unwrap().green_points;

    let report = store.submit_report(report_draft("Sector 21 market")).unwrap();

    assert_eq!(report.status, ReportStatus::Pending);
    assert_eq!(store.user().unwrap().green_points, before + 25);
    assert_eq!(store.reports().next().map(|r| &r.id), Some(&report.id));

    let user_id = store.user().unwrap().id.clone();
    assert_eq!(store.report_stats_for_user(&user_id).pending, 1);
    assert_eq!(store.dashboard().unwrap().reports.total, 1);
}

// =============================================================================
// Training
// =============================================================================

#[test]
fn test_completing_first_of_three_modules() {
    let mut store = citizen_store("learner@example.com")
        .unwrap()
        .with_training_modules(training_chain(3));
    let first = store.training_modules().first().unwrap().id.clone();

    store.complete_module(&first).unwrap();

    let flags: Vec<_> = store
        .training_modules()
        .iter()
        .map(|m| (m.is_completed, m.is_locked))
        .collect();
    assert_eq!(flags, [(true, false), (false, false), (false, true)]);
    assert_eq!(store.training_progress(), 33);
    assert_eq!(store.training_progress(), 33);
    assert!(!store.is_certified());
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_setting_quantity_to_zero_empties_cart() {
    let mut store = DomainStore::in_memory();
    let item = product("x1", 100);
    store.add_to_cart(&item, false).unwrap();
    store.add_to_cart(&item, false).unwrap();
    assert_eq!(store.cart_total(), Price::inr(200));

    store.update_cart_quantity(&item.id, 0);

    assert!(store.cart().is_empty());
    assert_eq!(store.cart_total(), Price::inr(0));
}

// =============================================================================
// Orders
// =============================================================================

#[test]
fn test_order_total_status_and_tracking_number() {
    let mut store = DomainStore::in_memory();
    let items = [CartItem {
        product: product("x2", 500),
        quantity: 2,
        use_green_points: false,
    }];

    let order = store.create_order(&UserId::new("u1"), &items).unwrap();

    assert_eq!(order.total, Price::inr(1000));
    assert_eq!(order.status, OrderStatus::Processing);
    assert!(is_well_formed_tracking_number(&order.tracking_number));
    assert_eq!(
        store.order_by_tracking_number(&order.tracking_number),
        Some(&order)
    );
}

#[test]
fn test_empty_order_is_rejected() {
    let mut store = DomainStore::in_memory();
    assert!(matches!(
        store.create_order(&UserId::new("u1"), &[]),
        Err(StoreError::Validation(_))
    ));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_closing_closed_query_changes_nothing() {
    let mut store = DomainStore::in_memory();
    let id = QueryId::new("q2");
    store.close_query(&id);
    let snapshot: Vec<_> = store.queries().cloned().collect();

    store.close_query(&id);

    assert_eq!(store.query(&id).unwrap().status, QueryStatus::Closed);
    assert_eq!(store.queries().cloned().collect::<Vec<_>>(), snapshot);
}
