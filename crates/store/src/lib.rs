//! EcoSankalp domain store.
//!
//! Holds the state of one user session: the signed-in user, waste reports,
//! the training chain, the marketplace cart, orders and support tickets.
//! State lives in a [`DomainStore`] value owned by the caller and is kept in
//! sync with a small key/value [`storage`] backend.
//!
//! # Example
//!
//! ```
//! use ecosankalp_core::UserRole;
//! use ecosankalp_store::DomainStore;
//! use secrecy::SecretString;
//!
//! let mut store = DomainStore::in_memory();
//! let password = SecretString::from("secret".to_owned());
//! let user = store.login("jane.doe@example.com", &password, UserRole::Citizen)?;
//! assert_eq!(user.name, "Jane Doe");
//! # Ok::<(), ecosankalp_store::StoreError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod seed;
pub mod stats;
pub mod storage;
mod store;

pub use config::{ConfigError, RewardConfig, StoreConfig};
pub use error::{AuthError, Result, StoreError};
pub use payment::{CheckoutError, PaymentDetails, PaymentGateway, PaymentOutcome, ScriptedGateway};
pub use stats::{DashboardStats, ReportStats};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::DomainStore;
