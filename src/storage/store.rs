// ============================================================================
// String Stores
// The key-value text store contract and an in-memory implementation
// ============================================================================

use std::collections::HashMap;
use tracing::debug;

/// A key-value store of text, in the shape of a browser's local storage.
///
/// Implementations never panic on failure: a backend that is full,
/// disabled, or otherwise unwilling reports the write as rejected.
pub trait StringStore {
    /// The stored text for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous text.
    ///
    /// Returns whether the write was accepted.
    fn set(&mut self, key: &str, value: &str) -> bool;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// In-memory [`StringStore`] with an optional byte quota.
///
/// The quota counts key and value bytes together, mirroring how browser
/// storage accounts for both. Writes that would exceed it are rejected.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys plus values would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(bytes),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        if let Some(quota) = self.quota_bytes {
            let replaced = self
                .entries
                .get(key)
                .map(|existing| key.len() + existing.len())
                .unwrap_or(0);
            let projected = self.used_bytes() - replaced + key.len() + value.len();
            if projected > quota {
                debug!(key, projected, quota, "write rejected by quota");
                return false;
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
