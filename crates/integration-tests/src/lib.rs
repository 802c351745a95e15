//! Integration tests for EcoSankalp.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ecosankalp-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `scenarios` - end-to-end user journeys over an in-memory store
//! - `lifecycles` - report, training and order state machines
//! - `persistence` - rehydration and storage failure handling
//! - `checkout` - payment gateway flow
//!
//! This crate only holds shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use secrecy::SecretString;

use ecosankalp_core::{Severity, UserRole};
use ecosankalp_store::models::{GeoLocation, ReportDraft, TrainingModule};
use ecosankalp_store::{
    DomainStore, FileStorage, PaymentDetails, Result, StoreConfig, seed,
};

/// Password used by every fixture login.
#[must_use]
pub fn password() -> SecretString {
    SecretString::from("correct horse battery staple".to_owned())
}

/// A fresh in-memory store with a citizen signed in.
///
/// # Errors
///
/// Returns `StoreError` if the fixture login fails.
pub fn citizen_store(email: &str) -> Result<DomainStore> {
    let mut store = DomainStore::in_memory();
    store.login(email, &password(), UserRole::Citizen)?;
    Ok(store)
}

/// A store persisting to `dir` with default configuration.
#[must_use]
pub fn file_store(dir: &Path) -> DomainStore {
    DomainStore::load(FileStorage::new(dir), &StoreConfig::default())
}

/// The first `len` modules of the built-in training chain.
#[must_use]
pub fn training_chain(len: usize) -> Vec<TrainingModule> {
    seed::training_modules().into_iter().take(len).collect()
}

/// A valid report draft at `address`.
#[must_use]
pub fn report_draft(address: &str) -> ReportDraft {
    ReportDraft {
        image_url: "/uploads/report.jpg".to_owned(),
        location: GeoLocation {
            lat: 28.6139,
            lng: 77.209,
            address: address.to_owned(),
        },
        description: "Mixed waste dumped beside the bus stop.".to_owned(),
        severity: Severity::Medium,
    }
}

/// Card details the scripted gateway authorizes.
#[must_use]
pub fn good_card() -> PaymentDetails {
    card("Test Buyer", "4111 1111 1111 1111")
}

/// Card details with an explicit name and number.
#[must_use]
pub fn card(name: &str, number: &str) -> PaymentDetails {
    PaymentDetails {
        card_name: name.to_owned(),
        card_number: SecretString::from(number.to_owned()),
        expiry: "08/30".to_owned(),
        cvv: SecretString::from("321".to_owned()),
    }
}
