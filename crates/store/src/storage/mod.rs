//! Persistence adapter: a thin key/value durable store.
//!
//! The domain store keeps four independent slots in sync with its in-memory
//! collections. Each slot value is a JSON envelope carrying a schema version:
//!
//! ```json
//! {"version": 1, "data": [...]}
//! ```
//!
//! Slots are not transactional with each other; a crash between two writes
//! can leave one slot newer than another.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - process-local map, shared between clones
//! - [`FileStorage`] - one `<key>.json` file per slot in a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version written into every slot envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors raised by storage backends and slot encoding.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slot contents could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Slot was written by an incompatible schema.
    #[error("unsupported schema version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the envelope.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// Backend cannot serve requests (e.g. quota exceeded, lock poisoned).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value durable store.
pub trait KeyValueStore: Send {
    /// Read the raw value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// The four persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Session user record.
    User,
    /// Cart lines.
    Cart,
    /// Support tickets.
    Queries,
    /// Orders.
    Orders,
}

impl Slot {
    /// Every slot, in load order.
    pub const ALL: [Self; 4] = [Self::User, Self::Cart, Self::Queries, Self::Orders];

    /// Storage key for the slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::User => "es_user",
            Self::Cart => "es_cart",
            Self::Queries => "es_queries",
            Self::Orders => "es_orders",
        }
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    data: serde_json::Value,
}

/// Wrap a value in a versioned envelope.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the value cannot be encoded.
pub fn encode<T: Serialize>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        data: value,
    })?)
}

/// Unwrap a versioned envelope.
///
/// # Errors
///
/// Returns `StorageError::UnsupportedVersion` when the envelope was written
/// by another schema, or `StorageError::Serialization` when it is malformed.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, StorageError> {
    // The payload is typed only after the version check, so a newer shape
    // reports as a version problem.
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != SCHEMA_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: envelope.version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(serde_json::from_value(envelope.data)?)
}
