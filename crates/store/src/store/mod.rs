//! The domain store.
//!
//! [`DomainStore`] owns every mutable collection of a session. Consumers read
//! snapshots through accessor methods and change state only through the
//! operation methods, which are split by concern:
//!
//! - `session` - login, signup, logout
//! - `reports` - waste report submission and lifecycle
//! - `training` - module completion and progress
//! - `cart` - cart lines
//! - `orders` - order creation and fulfillment
//! - `queries` - support tickets
//!
//! Every mutation takes `&mut self`, validates before it touches anything,
//! and writes the affected storage slot before returning.

mod cart;
mod orders;
mod queries;
mod reports;
mod session;
mod training;

use chrono::Utc;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use ecosankalp_core::{
    FacilityId, FacilityType, ModuleId, OrderId, OrderStatus, Price, ProductId, QueryId, ReportId, UserId,
};

use crate::config::{RewardConfig, StoreConfig};
use crate::error::{Result, StoreError};
use crate::models::catalog::items_total;
use crate::models::{
    CartItem, Facility, Order, Product, TrainingModule, User, UserQuery, WasteReport,
};
use crate::seed::{self, LIVE_STATS, LiveStats};
use crate::stats::{self, DashboardStats, ReportStats};
use crate::storage::{self, KeyValueStore, MemoryStorage, Slot};

/// All mutable application state for one session.
pub struct DomainStore {
    storage: Box<dyn KeyValueStore>,
    persistence_degraded: bool,
    rewards: RewardConfig,
    admin_secret: SecretString,

    user: Option<User>,
    cart: Vec<CartItem>,
    queries: Vec<UserQuery>,
    orders: Vec<Order>,

    reports: Vec<WasteReport>,
    modules: Vec<TrainingModule>,
    products: Vec<Product>,
    facilities: Vec<Facility>,
}

impl std::fmt::Debug for DomainStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainStore")
            .field("user", &self.user.as_ref().map(|u| &u.id))
            .field("cart_lines", &self.cart.len())
            .field("queries", &self.queries.len())
            .field("orders", &self.orders.len())
            .field("reports", &self.reports.len())
            .field("persistence_degraded", &self.persistence_degraded)
            .finish_non_exhaustive()
    }
}

impl DomainStore {
    /// Build a store, rehydrating persisted slots from `storage`.
    ///
    /// Each slot is read independently. A slot that is absent, unreadable,
    /// malformed or written by another schema version falls back to its
    /// default: no user, empty cart, baseline queries, no orders.
    pub fn load(storage: impl KeyValueStore + 'static, config: &StoreConfig) -> Self {
        let now = Utc::now();

        let user: Option<User> = load_slot(&storage, Slot::User);
        let cart: Vec<CartItem> = load_slot(&storage, Slot::Cart).unwrap_or_default();
        let queries: Vec<UserQuery> =
            load_slot(&storage, Slot::Queries).unwrap_or_else(|| seed::queries(now));
        let orders: Vec<Order> = load_slot(&storage, Slot::Orders).unwrap_or_default();

        info!(
            signed_in = user.is_some(),
            cart_lines = cart.len(),
            queries = queries.len(),
            orders = orders.len(),
            "Domain store loaded"
        );

        Self {
            storage: Box::new(storage),
            persistence_degraded: false,
            rewards: config.rewards,
            admin_secret: config.admin_secret.clone(),
            user,
            cart,
            queries,
            orders,
            reports: seed::reports(now),
            modules: seed::training_modules(),
            products: seed::products(),
            facilities: seed::facilities(),
        }
    }

    /// A store over fresh in-memory storage with default configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new(), &StoreConfig::default())
    }

    /// Replace the training chain, e.g. with a shorter course.
    ///
    /// The chain is re-locked so that exactly the first incomplete module is
    /// the frontier.
    #[must_use]
    pub fn with_training_modules(mut self, mut modules: Vec<TrainingModule>) -> Self {
        let frontier = modules.iter().position(|m| !m.is_completed);
        for (i, module) in modules.iter_mut().enumerate() {
            module.is_locked = frontier.is_some_and(|f| i > f);
        }
        self.modules = modules;
        self
    }

    // =========================================================================
    // Session reads
    // =========================================================================

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True once a storage write has failed; the session then runs in
    /// memory only.
    #[must_use]
    pub const fn is_persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    // =========================================================================
    // Collection reads (newest first where ordering matters)
    // =========================================================================

    /// All reports, newest first.
    pub fn reports(&self) -> impl Iterator<Item = &WasteReport> {
        self.reports.iter().rev()
    }

    /// Look up a report.
    #[must_use]
    pub fn report(&self, id: &ReportId) -> Option<&WasteReport> {
        self.reports.iter().find(|r| &r.id == id)
    }

    /// Reports filed by one user, newest first.
    pub fn reports_for_user<'a>(
        &'a self,
        user_id: &'a UserId,
    ) -> impl Iterator<Item = &'a WasteReport> {
        self.reports().filter(move |r| &r.user_id == user_id)
    }

    /// The training chain in order.
    #[must_use]
    pub fn training_modules(&self) -> &[TrainingModule] {
        &self.modules
    }

    /// Look up a training module.
    #[must_use]
    pub fn training_module(&self, id: &ModuleId) -> Option<&TrainingModule> {
        self.modules.iter().find(|m| &m.id == id)
    }

    /// Marketplace catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a catalog product.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Cart lines in the order they were added.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Sum of `price * quantity` over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        items_total(&self.cart)
    }

    /// Number of units across all cart lines.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Support tickets, newest first.
    pub fn queries(&self) -> impl Iterator<Item = &UserQuery> {
        self.queries.iter().rev()
    }

    /// Look up a support ticket.
    #[must_use]
    pub fn query(&self, id: &QueryId) -> Option<&UserQuery> {
        self.queries.iter().find(|q| &q.id == id)
    }

    /// Orders, newest first.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().rev()
    }

    /// Look up an order.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Look up an order by its tracking number.
    #[must_use]
    pub fn order_by_tracking_number(&self, tracking_number: &str) -> Option<&Order> {
        let wanted = tracking_number.trim();
        self.orders
            .iter()
            .find(|o| o.tracking_number.eq_ignore_ascii_case(wanted))
    }

    /// Orders placed by one user, newest first.
    pub fn orders_for_user<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Order> {
        self.orders().filter(move |o| &o.user_id == user_id)
    }

    /// Processing facilities.
    #[must_use]
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Look up a facility.
    #[must_use]
    pub fn facility(&self, id: &FacilityId) -> Option<&Facility> {
        self.facilities.iter().find(|f| &f.id == id)
    }

    /// Facilities of one kind.
    pub fn facilities_of_type(&self, kind: FacilityType) -> impl Iterator<Item = &Facility> {
        self.facilities
            .iter()
            .filter(move |f| f.facility_type == kind)
    }

    /// Landing-page counters.
    #[must_use]
    pub const fn live_stats(&self) -> LiveStats {
        LIVE_STATS
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Percentage of completed training modules, rounded.
    #[must_use]
    pub fn training_progress(&self) -> u8 {
        stats::training_progress(&self.modules)
    }

    /// Whether the certificate is unlocked (every module completed).
    #[must_use]
    pub fn is_certified(&self) -> bool {
        self.training_progress() == 100
    }

    /// Status counts over every report.
    #[must_use]
    pub fn report_stats(&self) -> ReportStats {
        stats::report_stats(&self.reports)
    }

    /// Status counts over one user's reports.
    #[must_use]
    pub fn report_stats_for_user(&self, user_id: &UserId) -> ReportStats {
        stats::report_stats(self.reports.iter().filter(|r| &r.user_id == user_id))
    }

    /// Orders per status.
    #[must_use]
    pub fn order_status_counts(&self) -> Vec<(OrderStatus, usize)> {
        stats::order_status_counts(&self.orders)
    }

    /// Number of tickets still open.
    #[must_use]
    pub fn open_query_count(&self) -> usize {
        stats::open_query_count(&self.queries)
    }

    /// Dashboard figures for the signed-in user.
    #[must_use]
    pub fn dashboard(&self) -> Option<DashboardStats> {
        self.user
            .as_ref()
            .map(|user| stats::dashboard(user, &self.reports, &self.modules))
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn require_user(&mut self) -> Result<&mut User> {
        self.user.as_mut().ok_or(StoreError::AuthRequired)
    }

    /// Write one slot from its in-memory collection.
    ///
    /// Once a write has failed the store stops touching storage for the rest
    /// of the session.
    fn persist(&mut self, slot: Slot) {
        if self.persistence_degraded {
            return;
        }
        let encoded = match slot {
            Slot::User => self.user.as_ref().map(storage::encode),
            Slot::Cart => Some(storage::encode(&self.cart)),
            Slot::Queries => Some(storage::encode(&self.queries)),
            Slot::Orders => Some(storage::encode(&self.orders)),
        };
        let result = match encoded {
            Some(Ok(raw)) => self.storage.set(slot.key(), &raw),
            Some(Err(e)) => Err(e),
            None => self.storage.remove(slot.key()),
        };
        if let Err(e) = result {
            self.degrade(slot, &e);
        }
    }

    fn degrade(&mut self, slot: Slot, error: &storage::StorageError) {
        warn!(
            slot = slot.key(),
            error = %error,
            "Storage write failed, continuing in memory only"
        );
        self.persistence_degraded = true;
    }
}

/// Read and decode one slot, logging and discarding anything unusable.
fn load_slot<T: DeserializeOwned>(storage: &impl KeyValueStore, slot: Slot) -> Option<T> {
    let raw = match storage.get(slot.key()) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(slot = slot.key(), "Storage slot empty");
            return None;
        }
        Err(e) => {
            warn!(slot = slot.key(), error = %e, "Storage slot unreadable, using default");
            return None;
        }
    };
    match storage::decode(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(slot = slot.key(), error = %e, "Storage slot corrupt, using default");
            None
        }
    }
}

/// Reject empty or whitespace-only required fields.
fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
