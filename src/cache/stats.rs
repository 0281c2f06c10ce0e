//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and sweep counts.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
///
/// Counters are atomic so lookups can record hits and misses through a
/// shared reference while other readers proceed concurrently.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    hits: AtomicU64,
    /// Number of failed cache retrievals (key absent or expired)
    misses: AtomicU64,
    /// Number of entries removed by the background sweep
    swept: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Swept ==
    /// Adds `count` to the swept-entry counter.
    pub fn record_swept(&self, count: u64) {
        self.swept.fetch_add(count, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Takes a point-in-time copy of the counters.
    pub fn snapshot(&self, entries: usize) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            swept: self.swept.load(Ordering::Relaxed),
            entries,
        }
    }
}

// == Stats Snapshot ==
/// A plain copy of the counters, suitable for serialization.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheStatsSnapshot {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries removed by the background sweep
    pub swept: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        let snapshot = stats.snapshot(0);
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
        assert_eq!(snapshot.swept, 0);
        assert_eq!(snapshot.entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.snapshot(0).hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.snapshot(3).hit_rate(), 1.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.snapshot(1).hit_rate(), 0.5);
    }

    #[test]
    fn test_record_swept() {
        let stats = CacheStats::new();
        stats.record_swept(3);
        stats.record_swept(2);
        assert_eq!(stats.snapshot(0).swept, 5);
    }

    #[test]
    fn test_snapshot_serialize() {
        let stats = CacheStats::new();
        stats.record_hit();
        let json = serde_json::to_string(&stats.snapshot(1)).unwrap();
        assert!(json.contains("\"hits\":1"));
        assert!(json.contains("\"entries\":1"));
    }
}
