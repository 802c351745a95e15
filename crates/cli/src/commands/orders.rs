//! Order listing, tracking and fulfillment.

use tracing::info;

use ecosankalp_core::{OrderId, OrderStatus};
use ecosankalp_store::DomainStore;
use ecosankalp_store::models::Order;

fn print_order(order: &Order) {
    let next: Vec<&str> = order
        .status
        .next_actions()
        .iter()
        .map(OrderStatus::as_str)
        .collect();
    info!(
        "{} {} {:<14} {} {} item(s), {}{}",
        order.id,
        order.tracking_number,
        order.status.label(),
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.items.len(),
        order.total,
        if next.is_empty() {
            String::new()
        } else {
            format!("  next: {}", next.join(", "))
        }
    );
}

pub fn list(store: &DomainStore) {
    let mut any = false;
    for order in store.orders() {
        any = true;
        print_order(order);
    }
    if !any {
        info!("No orders");
    }
}

pub fn track(store: &DomainStore, tracking_number: &str) -> Result<(), Box<dyn std::error::Error>> {
    let order = store
        .order_by_tracking_number(tracking_number)
        .ok_or_else(|| format!("no order with tracking number {tracking_number}"))?;
    print_order(order);
    for item in &order.items {
        info!("  {} x{}", item.product.name, item.quantity);
    }
    Ok(())
}

pub fn set_status(
    store: &mut DomainStore,
    order_id: &str,
    status: OrderStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = OrderId::new(order_id);
    store.update_order_status(&id, status)?;
    if let Some(order) = store.order(&id) {
        print_order(order);
    }
    Ok(())
}
