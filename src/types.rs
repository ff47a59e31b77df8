//! Core trait and metrics types for the cache

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability contract for values that can live in the cache
///
/// A value's identifier is its cache key: a stable, non-empty string that
/// uniquely determines the value's cache identity and never changes for the
/// lifetime of the object. Any type can opt in by implementing this trait;
/// no base type or wrapper is required.
pub trait Identifiable {
    /// The stable identifier for this value
    fn id(&self) -> &str;
}

/// A string identifies itself
impl Identifiable for String {
    fn id(&self) -> &str {
        self
    }
}

impl Identifiable for &'static str {
    fn id(&self) -> &str {
        self
    }
}

/// Statistics for cache performance monitoring
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Total number of cache hits
    pub hits: u64,

    /// Total number of cache misses (including expired lookups)
    pub misses: u64,

    /// Number of entries removed by capacity eviction
    pub evictions_capacity: u64,

    /// Number of entries removed by TTL expiry
    pub evictions_ttl: u64,

    /// Number of in-place replacements via `put` with an existing id
    pub replacements: u64,
}

impl CacheStats {
    /// Calculate cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Total entries removed by either eviction mechanism
    pub fn total_evictions(&self) -> u64 {
        self.evictions_capacity + self.evictions_ttl
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheStats {{ hits: {}, misses: {}, hit_rate: {:.2}%, evictions: {}, replacements: {} }}",
            self.hits,
            self.misses,
            self.hit_rate(),
            self.total_evictions(),
            self.replacements
        )
    }
}
