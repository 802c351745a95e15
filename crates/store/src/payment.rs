//! Checkout through a payment gateway.
//!
//! The store only ever sees the gateway's verdict. An order is created, and
//! the cart cleared, strictly after an `Authorized` outcome; a declined
//! payment leaves every collection as it was.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use ecosankalp_core::Price;

use crate::error::StoreError;
use crate::models::Order;
use crate::store::DomainStore;

/// Card details entered at checkout.
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: SecretString,
    /// `MM/YY`.
    pub expiry: String,
    pub cvv: SecretString,
}

/// A gateway's answer to an authorization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Authorized { reference: String },
    Declined { reason: String },
}

/// Payment collaborator consulted by [`DomainStore::checkout`].
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the gateway to authorize `amount` against the card.
    async fn authorize(&self, amount: Price, details: &PaymentDetails) -> PaymentOutcome;
}

/// Offline gateway that answers after a fixed delay.
///
/// Declines a blank cardholder name or a card number with fewer than 12
/// digits; authorizes everything else.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedGateway {
    latency: Duration,
}

impl ScriptedGateway {
    const MIN_CARD_DIGITS: usize = 12;

    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A gateway that answers immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn authorize(&self, amount: Price, details: &PaymentDetails) -> PaymentOutcome {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if details.card_name.trim().is_empty() {
            return PaymentOutcome::Declined {
                reason: "cardholder name is required".to_owned(),
            };
        }
        let digits = details
            .card_number
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        if digits < Self::MIN_CARD_DIGITS {
            return PaymentOutcome::Declined {
                reason: "card number is invalid".to_owned(),
            };
        }

        let reference = format!("PAY{}", Uuid::new_v4().simple());
        info!(%amount, %reference, "Payment authorized");
        PaymentOutcome::Authorized { reference }
    }
}

/// Errors that can occur during checkout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("payment declined: {0}")]
    PaymentDeclined(String),
}

impl DomainStore {
    /// Pay for the cart and turn it into an order.
    ///
    /// Holds the store across the gateway call; after authorization the
    /// order is created and the cart cleared without yielding in between.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AuthRequired` without a session,
    /// `StoreError::Validation` for an empty cart (both before the gateway is
    /// asked), or `CheckoutError::PaymentDeclined`.
    #[instrument(skip_all, fields(lines = self.cart().len()))]
    pub async fn checkout<G>(
        &mut self,
        gateway: &G,
        details: &PaymentDetails,
    ) -> Result<Order, CheckoutError>
    where
        G: PaymentGateway + ?Sized,
    {
        let user_id = self
            .user()
            .map(|u| u.id.clone())
            .ok_or(StoreError::AuthRequired)?;
        if self.cart().is_empty() {
            return Err(StoreError::Validation("cart is empty".to_owned()).into());
        }

        match gateway.authorize(self.cart_total(), details).await {
            PaymentOutcome::Authorized { .. } => {
                let items = self.cart().to_vec();
                let order = self.create_order(&user_id, &items)?;
                self.clear_cart();
                Ok(order)
            }
            PaymentOutcome::Declined { reason } => {
                warn!(%reason, "Payment declined");
                Err(CheckoutError::PaymentDeclined(reason))
            }
        }
    }
}
