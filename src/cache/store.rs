//! Cache Store Module
//!
//! Generic key-value store with a single store-wide TTL. Lookups detect
//! expiry lazily; physical removal of expired entries is left to the
//! background sweep.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, CacheStatsSnapshot};

// == Cache Store ==
/// In-memory cache mapping string keys to values of type `V`.
///
/// Every entry expires `ttl` after it was written; there is no per-entry
/// TTL override. Intended to be shared behind `Arc<RwLock<_>>`: lookups
/// take `&self` so concurrent readers proceed together, while writes
/// (`set`, `delete`, `clear`, `sweep_expired`) require exclusive access.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Time-to-live applied to every entry at write time
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore whose entries live for `ttl` after each write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a key-value pair, stamping a fresh expiry.
    ///
    /// If the key already exists the value is overwritten and its TTL reset.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), CacheEntry::new(value, self.ttl));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key is absent or its entry has expired. An
    /// expired entry is not removed here; it stays in the backing map until
    /// the sweep runs, so `len` may overcount in the meantime.
    pub fn get(&self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry, replacing the backing map.
    pub fn clear(&mut self) {
        self.entries = HashMap::new();
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_swept(count as u64);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == TTL ==
    /// Returns the store-wide TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
