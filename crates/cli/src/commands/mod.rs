//! Subcommand implementations.
//!
//! Every command runs against one [`DomainStore`] opened from the data
//! directory and reports through `tracing`.

pub mod info;
pub mod orders;
pub mod queries;
pub mod reports;
pub mod session;
pub mod shop;
pub mod training;

use std::path::PathBuf;

use tracing::{debug, warn};

use ecosankalp_store::{DomainStore, FileStorage, MemoryStorage, StoreConfig};

/// Load configuration and open the store.
///
/// `data_dir` wins over `ECOSANKALP_DATA_DIR`. Without either the store is
/// in memory and nothing outlives the process.
///
/// # Errors
///
/// Returns an error if the environment holds an invalid setting.
pub fn open_store(
    data_dir: Option<PathBuf>,
) -> Result<(DomainStore, StoreConfig), Box<dyn std::error::Error>> {
    let mut config = StoreConfig::from_env()?;
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }

    let store = match &config.data_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using file storage");
            DomainStore::load(FileStorage::new(dir.clone()), &config)
        }
        None => {
            warn!("No data directory configured; state will not be kept between runs");
            DomainStore::load(MemoryStorage::new(), &config)
        }
    };
    Ok((store, config))
}

/// Error for commands that need a signed-in user.
fn not_signed_in() -> Box<dyn std::error::Error> {
    "not signed in; run `eco login` first".into()
}
