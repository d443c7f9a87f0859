/*!
 * Shared Map
 * Key-value container contended by reader and writer threads
 */

use ahash::RandomState;
use std::collections::HashMap;

/// Map from bounded integer keys to stringified values
///
/// The container itself is not thread-safe: every access goes through a
/// strategy's guards. Keys stay within `[0, key_space)` by construction
/// of the workload, so a run of `n` iterations can never grow the map
/// past `n` entries.
#[derive(Debug, Default)]
pub struct SharedMap {
    entries: HashMap<u32, String, RandomState>,
}

impl SharedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key; a miss is not an error
    #[inline]
    pub fn lookup(&self, key: u32) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Insert or overwrite the value for a key (last write wins)
    #[inline]
    pub fn store(&mut self, key: u32, value: String) {
        self.entries.insert(key, value);
    }

    /// Remove all entries ahead of a fresh run
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
