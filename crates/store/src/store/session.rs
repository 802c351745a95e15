//! Sign-in, sign-up and sign-out.
//!
//! There is no credential store: any email-shaped login succeeds and
//! passwords are accepted as-is, except on the admin console gate.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use ecosankalp_core::{Email, UserId, UserRole};

use super::{DomainStore, require_non_empty};
use crate::error::{AuthError, Result};
use crate::models::User;
use crate::storage::Slot;

impl DomainStore {
    /// Sign in and replace the session.
    ///
    /// The display name is derived from the email and the id is stable per
    /// email. Citizens start at level 2 with the configured seed balance;
    /// other roles start at level 1 with nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Auth` if the email is malformed.
    #[instrument(skip(self, email, _password), fields(role = %role))]
    pub fn login(&mut self, email: &str, _password: &SecretString, role: UserRole) -> Result<User> {
        let email = Email::parse(email).map_err(AuthError::from)?;

        let (green_points, level) = match role {
            UserRole::Citizen => (self.rewards.citizen_seed_points, 2),
            UserRole::Worker | UserRole::Admin => (0, 1),
        };
        let user = User {
            id: UserId::from_email(&email),
            name: email.display_name(),
            email,
            role,
            green_points,
            level,
            training_completed: false,
            joined_at: Utc::now(),
        };

        info!(user_id = %user.id, "User signed in");
        Ok(self.start_session(user))
    }

    /// Sign in through the admin console.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the password is not the
    /// configured admin secret, or `StoreError::Auth` for a malformed email.
    /// The session is untouched on failure.
    #[instrument(skip(self, email, password))]
    pub fn admin_login(&mut self, email: &str, password: &SecretString) -> Result<User> {
        if password.expose_secret() != self.admin_secret.expose_secret() {
            warn!("Admin sign-in rejected");
            return Err(AuthError::InvalidCredentials.into());
        }
        self.login(email, password, UserRole::Admin)
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the name is blank, or
    /// `StoreError::Auth` if the email is malformed.
    #[instrument(skip(self, name, email, _password), fields(role = %role))]
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        _password: &SecretString,
        role: UserRole,
    ) -> Result<User> {
        require_non_empty("name", name)?;
        let email = Email::parse(email).map_err(AuthError::from)?;

        let user = User {
            id: UserId::generate(),
            name: name.trim().to_owned(),
            email,
            role,
            green_points: 0,
            level: 1,
            training_completed: false,
            joined_at: Utc::now(),
        };

        info!(user_id = %user.id, "User signed up");
        Ok(self.start_session(user))
    }

    /// Sign out and empty the cart. Safe to call when nobody is signed in.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "User signed out");
        }
        self.cart.clear();
        self.persist(Slot::User);
        self.persist(Slot::Cart);
    }

    fn start_session(&mut self, user: User) -> User {
        self.user = Some(user.clone());
        self.persist(Slot::User);
        user
    }
}
