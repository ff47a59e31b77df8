//! Configuration for the cache

use crate::error::{CacheError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The default capacity is 32 entries
pub const DEFAULT_CAPACITY: usize = 32;

/// The default timeout is 180 seconds
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Configuration for a [`TimedLruCache`](crate::TimedLruCache)
///
/// Two knobs: how many entries the cache may hold, and how long an entry may
/// go without being refreshed before it is considered expired. A zero timeout
/// disables time-based expiry entirely; capacity eviction still applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    /// Must be at least 1
    pub capacity: usize,

    /// How long an entry stays fresh after its last refresh
    /// Zero means entries never expire by time
    pub timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with the given capacity and timeout
    pub fn new(capacity: usize, timeout: Duration) -> Self {
        Self { capacity, timeout }
    }

    /// Create a new builder for cache configuration
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Validate the configuration
    ///
    /// Capacity must be a positive integer. Timeouts cannot be negative by
    /// construction (`Duration` is unsigned), so only the zero-capacity case
    /// remains to check.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether time-based expiry is enabled
    pub fn expires(&self) -> bool {
        !self.timeout.is_zero()
    }
}

/// Builder for cache configuration
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    capacity: Option<usize>,
    timeout: Option<Duration>,
}

impl CacheConfigBuilder {
    /// Set the maximum number of entries
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the freshness timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the cache configuration
    pub fn build(self) -> CacheConfig {
        let defaults = CacheConfig::default();

        CacheConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        }
    }
}
