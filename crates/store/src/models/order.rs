//! Marketplace orders.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use ecosankalp_core::{OrderId, OrderStatus, Price, UserId};

use super::CartItem;

/// Prefix of every generated tracking number.
pub const TRACKING_PREFIX: &str = "TRK";

/// A placed order.
///
/// `items` is a snapshot of the cart at checkout and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub tracking_number: String,
}

/// Generate a tracking number: `TRK` followed by six digits.
#[must_use]
pub fn generate_tracking_number() -> String {
    let digits: u32 = rand::rng().random_range(100_000..=999_999);
    format!("{TRACKING_PREFIX}{digits}")
}

/// Whether a string looks like a tracking number this store issues.
#[must_use]
pub fn is_well_formed_tracking_number(s: &str) -> bool {
    s.strip_prefix(TRACKING_PREFIX).is_some_and(|digits| {
        digits.len() == 6
            && digits.bytes().all(|b| b.is_ascii_digit())
            && !digits.starts_with('0')
    })
}
