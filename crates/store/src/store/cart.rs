//! Cart lines.

use tracing::{debug, info, instrument};

use ecosankalp_core::ProductId;

use super::DomainStore;
use crate::error::{Result, StoreError};
use crate::models::{CartItem, Product};
use crate::storage::Slot;

impl DomainStore {
    /// Add one unit of `product`.
    ///
    /// An existing line gains a unit and takes the new redemption flag;
    /// otherwise a line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OutOfStock` if the product is unavailable.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, use_green_points: bool) -> Result<()> {
        if !product.in_stock {
            return Err(StoreError::OutOfStock(product.id.to_string()));
        }

        match self.cart.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                item.use_green_points = use_green_points;
            }
            None => self.cart.push(CartItem {
                product: product.clone(),
                quantity: 1,
                use_green_points,
            }),
        }

        info!(cart_units = self.cart_item_count(), "Added to cart");
        self.persist(Slot::Cart);
        Ok(())
    }

    /// Add one unit of a catalog product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product, otherwise as
    /// [`add_to_cart`](Self::add_to_cart).
    pub fn add_catalog_product_to_cart(
        &mut self,
        id: &ProductId,
        use_green_points: bool,
    ) -> Result<()> {
        let product = self
            .product(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("product", id))?;
        self.add_to_cart(&product, use_green_points)
    }

    /// Set a line's quantity exactly. Zero or less removes the line; an
    /// unknown product changes nothing.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn update_cart_quantity(&mut self, id: &ProductId, quantity: i64) {
        let Some(index) = self.cart.iter().position(|item| &item.product.id == id) else {
            debug!("Product not in cart");
            return;
        };

        if quantity <= 0 {
            self.cart.remove(index);
        } else if let Some(item) = self.cart.get_mut(index) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.persist(Slot::Cart);
    }

    /// Drop a line. Unknown products change nothing.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let before = self.cart.len();
        self.cart.retain(|item| &item.product.id != id);
        if self.cart.len() != before {
            self.persist(Slot::Cart);
        }
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist(Slot::Cart);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecosankalp_core::Price;

    use super::*;
    use crate::config::StoreConfig;
    use crate::storage::{self, KeyValueStore, MemoryStorage};

    fn catalog(store: &DomainStore, id: &str) -> Product {
        store.product(&ProductId::new(id)).cloned().unwrap()
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut store = DomainStore::in_memory();
        let bin = catalog(&store, "p1");

        store.add_to_cart(&bin, false).unwrap();
        store.add_to_cart(&bin, true).unwrap();

        assert_eq!(store.cart().len(), 1);
        let line = store.cart().first().unwrap();
        assert_eq!(line.quantity, 2);
        assert!(line.use_green_points);
        assert_eq!(store.cart_total(), Price::inr(2998));
    }

    #[test]
    fn test_out_of_stock_rejected() {
        let mut store = DomainStore::in_memory();
        let kit = catalog(&store, "p5");
        assert_eq!(
            store.add_to_cart(&kit, false),
            Err(StoreError::OutOfStock("p5".to_owned()))
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_catalog_product_unknown() {
        let mut store = DomainStore::in_memory();
        assert_eq!(
            store.add_catalog_product_to_cart(&ProductId::new("p99"), false),
            Err(StoreError::not_found("product", "p99"))
        );
    }

    #[test]
    fn test_update_quantity() {
        let mut store = DomainStore::in_memory();
        let id = ProductId::new("p3");
        store.add_catalog_product_to_cart(&id, false).unwrap();

        store.update_cart_quantity(&id, 4);
        assert_eq!(store.cart_item_count(), 4);
        assert_eq!(store.cart_total(), Price::inr(1596));

        store.update_cart_quantity(&ProductId::new("p1"), 3);
        assert_eq!(store.cart().len(), 1);

        store.update_cart_quantity(&id, -2);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = DomainStore::in_memory();
        store.add_catalog_product_to_cart(&ProductId::new("p1"), false).unwrap();
        store.add_catalog_product_to_cart(&ProductId::new("p2"), false).unwrap();

        store.remove_from_cart(&ProductId::new("p1"));
        assert_eq!(store.cart().len(), 1);
        store.remove_from_cart(&ProductId::new("p1"));
        assert_eq!(store.cart().len(), 1);

        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cart_slot_written_after_each_change() {
        let storage = MemoryStorage::new();
        let mut store = DomainStore::load(storage.clone(), &StoreConfig::default());
        let id = ProductId::new("p6");

        store.add_catalog_product_to_cart(&id, false).unwrap();
        store.update_cart_quantity(&id, 3);

        let raw = storage.get(Slot::Cart.key()).unwrap().unwrap();
        let persisted: Vec<CartItem> = storage::decode(&raw).unwrap();
        assert_eq!(persisted.first().map(|item| item.quantity), Some(3));
    }
}
