// Copyright (c) 2022 MASSA LABS <info@massa.net>
// This file defines an in-memory state backend for testing purposes

use crate::{StateController, StateError};
use std::collections::BTreeMap;

/// In-memory `StateController` backed by a sorted map.
///
/// Reading an absent key yields empty bytes, which is one of the two
/// absence behaviors a host backend is allowed to have. Tests must not
/// rely on distinguishing an absent key from an empty value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateController {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStateController {
    /// Creates an empty in-memory state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a copy of the raw bytes stored under a key, if any.
    ///
    /// Bypasses the absence semantics of `get` so tests can assert on
    /// the exact stored content.
    pub fn raw_entry(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the state holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateController for MemoryStateController {
    fn get(&self, key: &str) -> Result<Vec<u8>, StateError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StateError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_put_delete_roundtrip() {
        let mut state = MemoryStateController::new();
        assert!(state.is_empty());

        state.put("k", b"v".to_vec()).unwrap();
        assert_eq!(state.get("k").unwrap(), b"v".to_vec());
        assert_eq!(state.raw_entry("k"), Some(b"v".to_vec()));
        assert_eq!(state.len(), 1);

        state.delete("k").unwrap();
        assert_eq!(state.get("k").unwrap(), Vec::<u8>::new());
        assert_eq!(state.raw_entry("k"), None);
    }

    #[test]
    fn absent_key_reads_as_empty_bytes() {
        let state = MemoryStateController::new();
        assert_eq!(state.get("missing").unwrap(), Vec::<u8>::new());
    }
}
