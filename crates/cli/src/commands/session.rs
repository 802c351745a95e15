//! Sign-in commands.

use secrecy::SecretString;
use tracing::info;

use ecosankalp_core::UserRole;
use ecosankalp_store::DomainStore;

pub fn login(
    store: &mut DomainStore,
    email: &str,
    password: String,
    role: UserRole,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = store.login(email, &SecretString::from(password), role)?;
    info!(
        "Signed in as {} ({}), {} Green Points",
        user.name, user.role, user.green_points
    );
    Ok(())
}

pub fn admin_login(
    store: &mut DomainStore,
    email: &str,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = store.admin_login(email, &SecretString::from(password))?;
    info!("Admin console unlocked for {}", user.name);
    Ok(())
}

pub fn signup(
    store: &mut DomainStore,
    name: &str,
    email: &str,
    password: String,
    role: UserRole,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = store.signup(name, email, &SecretString::from(password), role)?;
    info!("Welcome, {}! Account {} created", user.name, user.id);
    Ok(())
}

pub fn logout(store: &mut DomainStore) {
    store.logout();
    info!("Signed out");
}

pub fn whoami(store: &DomainStore) {
    match store.user() {
        Some(user) => info!(
            "{} <{}> role={} level={} ({}) points={} joined={}",
            user.name,
            user.email,
            user.role,
            user.level,
            user.level_title(),
            user.green_points,
            user.joined_at.format("%Y-%m-%d")
        ),
        None => info!("Not signed in"),
    }
}
