//! In-memory store

use std::collections::HashMap;

use super::{Store, StoreError};

/// Volatile store; can be told to refuse writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, i64>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes always fail
    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            read_only: true,
        }
    }

    /// Pre-populated store
    pub fn with_entry(key: &str, value: i64) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value);
        store
    }
}

impl Store for MemoryStore {
    fn load_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.entries.get(key).copied())
    }

    fn save_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Rejected {
                key: key.to_string(),
            });
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_int("highscore").unwrap(), None);
        store.save_int("highscore", 30).unwrap();
        assert_eq!(store.load_int("highscore").unwrap(), Some(30));
    }

    #[test]
    fn test_read_only_rejects() {
        let mut store = MemoryStore::read_only();
        assert!(store.save_int("highscore", 1).is_err());
        assert_eq!(store.load_int("highscore").unwrap(), None);
    }
}
