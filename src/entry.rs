//! Cache entry record with freshness tracking

use std::time::{Duration, Instant};

/// A single cache entry: the stored value plus its freshness clock
///
/// `last_access` is reset whenever the entry is inserted, read, or touched;
/// an entry whose age exceeds the cache timeout is expired and removed by the
/// next lazy sweep.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,

    /// When the entry was last inserted, read, or touched
    pub last_access: Instant,
}

impl<V> CacheEntry<V> {
    /// Create a new entry that is fresh as of `now`
    pub fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            last_access: now,
        }
    }

    /// Reset the freshness clock to `now`
    pub fn refresh(&mut self, now: Instant) {
        self.last_access = now;
    }

    /// Time elapsed since the entry was last refreshed
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_access)
    }

    /// Check whether the entry has outlived the timeout as of `now`
    ///
    /// A zero timeout disables time-based expiry, so nothing is ever stale.
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        !timeout.is_zero() && self.age(now) > timeout
    }

    /// Replace the value and reset the freshness clock
    pub fn replace(&mut self, value: V, now: Instant) {
        self.value = value;
        self.last_access = now;
    }
}
