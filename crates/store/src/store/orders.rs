//! Order creation and fulfillment.

use chrono::Utc;
use tracing::{debug, info, instrument};

use ecosankalp_core::{OrderId, OrderStatus, UserId};

use super::DomainStore;
use crate::error::{Result, StoreError};
use crate::models::order::generate_tracking_number;
use crate::models::{CartItem, Order, catalog::items_total};
use crate::storage::Slot;

impl DomainStore {
    /// Record an order for `items` in `processing`.
    ///
    /// The cart and the user's points are left alone; checkout clears the
    /// cart itself once the order exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `items` is empty or a line has
    /// zero quantity.
    #[instrument(skip(self, items), fields(user_id = %user_id, lines = items.len()))]
    pub fn create_order(&mut self, user_id: &UserId, items: &[CartItem]) -> Result<Order> {
        if items.is_empty() {
            return Err(StoreError::Validation("order has no items".to_owned()));
        }
        if let Some(item) = items.iter().find(|item| item.quantity == 0) {
            return Err(StoreError::Validation(format!(
                "quantity for {} must be at least 1",
                item.product.id
            )));
        }

        let order = Order {
            id: OrderId::generate(),
            user_id: user_id.clone(),
            items: items.to_vec(),
            total: items_total(items),
            created_at: Utc::now(),
            status: OrderStatus::Processing,
            tracking_number: self.unused_tracking_number(generate_tracking_number),
        };
        self.orders.push(order.clone());

        info!(
            order_id = %order.id,
            tracking_number = %order.tracking_number,
            total = %order.total,
            "Order created"
        );
        self.persist(Slot::Orders);
        Ok(order)
    }

    /// Draw tracking numbers from `generate` until one is not already taken.
    fn unused_tracking_number(&self, mut generate: impl FnMut() -> String) -> String {
        loop {
            let candidate = generate();
            if self.order_by_tracking_number(&candidate).is_none() {
                return candidate;
            }
            debug!(tracking_number = %candidate, "Tracking number taken, drawing again");
        }
    }

    /// Move an order along the fulfillment graph.
    ///
    /// Re-applying the current status changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or
    /// `StoreError::InvalidTransition` for a move the graph does not allow.
    #[instrument(skip(self), fields(order_id = %id, to = %status))]
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| StoreError::not_found("order", id))?;

        if order.status == status {
            return Ok(());
        }
        if !order.status.can_transition_to(status) {
            return Err(StoreError::invalid_transition("order", order.status, status));
        }

        info!(from = %order.status, "Order status updated");
        order.status = status;
        self.persist(Slot::Orders);
        Ok(())
    }
}
