//! Catalog, cart and checkout commands.

use secrecy::SecretString;
use tracing::info;

use ecosankalp_core::{ProductCategory, ProductId};
use ecosankalp_store::{DomainStore, PaymentDetails, ScriptedGateway, StoreConfig};

pub fn catalog(store: &DomainStore, category: Option<ProductCategory>) {
    let products = store
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c));
    for p in products {
        info!(
            "{:<3} {:<32} {:>7} or {:>5} pts  {}",
            p.id.as_str(),
            p.name,
            p.price.to_string(),
            p.green_points_price,
            if p.in_stock { "" } else { "(out of stock)" }
        );
    }
}

pub fn add(
    store: &mut DomainStore,
    product_id: &str,
    green_points: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    store.add_catalog_product_to_cart(&ProductId::new(product_id), green_points)?;
    info!(
        "Cart: {} items, total {}",
        store.cart_item_count(),
        store.cart_total()
    );
    Ok(())
}

pub fn set_quantity(store: &mut DomainStore, product_id: &str, quantity: i64) {
    store.update_cart_quantity(&ProductId::new(product_id), quantity);
    show(store);
}

pub fn remove(store: &mut DomainStore, product_id: &str) {
    store.remove_from_cart(&ProductId::new(product_id));
    show(store);
}

pub fn clear(store: &mut DomainStore) {
    store.clear_cart();
    info!("Cart emptied");
}

pub fn show(store: &DomainStore) {
    if store.cart().is_empty() {
        info!("Cart is empty");
        return;
    }
    for item in store.cart() {
        info!(
            "{:<3} {:<32} x{:<3} {:>8}{}",
            item.product.id.as_str(),
            item.product.name,
            item.quantity,
            item.line_total().to_string(),
            if item.use_green_points { "  (redeem points)" } else { "" }
        );
    }
    info!("Total: {}", store.cart_total());
}

#[must_use]
pub fn payment_details(
    card_name: String,
    card_number: String,
    expiry: String,
    cvv: String,
) -> PaymentDetails {
    PaymentDetails {
        card_name,
        card_number: SecretString::from(card_number),
        expiry,
        cvv: SecretString::from(cvv),
    }
}

pub async fn checkout(
    store: &mut DomainStore,
    config: &StoreConfig,
    details: &PaymentDetails,
) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(config.payment_latency);
    info!("Processing payment of {}...", store.cart_total());
    let order = store.checkout(&gateway, details).await?;
    info!(
        "Order {} placed. Tracking number: {} ({})",
        order.id,
        order.tracking_number,
        order.status.label()
    );
    Ok(())
}
