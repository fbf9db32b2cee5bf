//! Hit/miss counters for the cache facade.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic hit/miss counters, safe for concurrent increment and read.
///
/// No ordering is guaranteed across the two fields; a snapshot where one
/// field reflects a slightly later instant than the other is acceptable.
/// There is no reset.
#[derive(Debug, Default)]
pub struct StatsCounter {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StatsCounter {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Produce a point-in-time snapshot of both counters.
    pub fn snapshot(&self) -> Stats {
        Stats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Immutable counter snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub hits: u64,
    pub misses: u64,
}
