//! Marketplace catalog, cart lines and facility reference data.

use serde::{Deserialize, Serialize};

use ecosankalp_core::{FacilityId, FacilityType, Price, ProductCategory, ProductId};

use super::GeoLocation;

/// A marketplace product. Catalog entries are immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Cash price.
    pub price: Price,
    /// Price when redeemed with Green Points.
    pub green_points_price: u32,
    pub image: String,
    pub category: ProductCategory,
    pub in_stock: bool,
}

/// One cart line. The product is snapshotted when it is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
    /// Buyer asked to redeem Green Points for this line.
    pub use_green_points: bool,
}

impl CartItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Sum of `price * quantity` over the lines.
///
/// Lines flagged for Green Point redemption are charged at full price.
#[must_use]
pub fn items_total(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_total).sum()
}

/// A waste processing facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    pub location: GeoLocation,
    pub phone: String,
    pub hours: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            description: String::new(),
            price: Price::inr(rupees),
            green_points_price: 10,
            image: String::new(),
            category: ProductCategory::Bags,
            in_stock: true,
        }
    }

    #[test]
    fn test_items_total_ignores_redemption_flag() {
        let items = vec![
            CartItem {
                product: product("a", 100),
                quantity: 3,
                use_green_points: false,
            },
            CartItem {
                product: product("b", 250),
                quantity: 2,
                use_green_points: true,
            },
        ];
        assert_eq!(items_total(&items), Price::inr(800));
    }

    #[test]
    fn test_items_total_empty() {
        assert_eq!(items_total(&[]), Price::default());
    }
}
