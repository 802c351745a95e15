//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{KeyValueStore, StorageError};

/// Process-local key/value storage.
///
/// Clones share the same map, so a test can hand one clone to a store and
/// keep another to inspect or pre-seed slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_owned()))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let mut storage = MemoryStorage::new();
        let observer = storage.clone();

        storage.set("es_cart", "[]").unwrap();
        assert_eq!(observer.get("es_cart").unwrap().as_deref(), Some("[]"));

        storage.remove("es_cart").unwrap();
        assert_eq!(observer.get("es_cart").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key() {
        let mut storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }
}
