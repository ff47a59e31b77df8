//! Main cache implementation with LRU eviction and TTL expiry

use crate::config::CacheConfig;
use crate::entry::CacheEntry;
use crate::error::{CacheError, Result};
use crate::types::{CacheStats, Identifiable};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Fixed-capacity cache with LRU eviction and per-entry TTL expiry
///
/// Values are keyed by their [`Identifiable`] id. Two coupled views are kept
/// over the same entries: a recency queue (least recently used first) that
/// drives capacity eviction, and a per-entry freshness clock that drives
/// time-based expiry. Expired entries are purged lazily, on the next public
/// operation, rather than by a background timer.
///
/// The cache is a plain synchronous data structure: `put`, `get`, and `touch`
/// each read and then write shared state, so a host that shares a cache
/// across workers must serialize access (for example behind a `Mutex`).
///
/// Every mutating operation also has an `*_at` variant that takes the current
/// instant explicitly, so tests and hosts with their own time source can
/// simulate the clock instead of sleeping.
pub struct TimedLruCache<V> {
    /// Cache configuration
    config: CacheConfig,

    /// Main storage: id -> entry
    entries: HashMap<String, CacheEntry<V>>,

    /// Recency order: least recently used at the front
    recency: VecDeque<String>,

    /// Hit/miss/eviction counters
    stats: CacheStats,
}

impl<V> Default for TimedLruCache<V> {
    /// A cache with the default configuration (capacity 32, timeout 180 s)
    fn default() -> Self {
        Self {
            config: CacheConfig::default(),
            entries: HashMap::new(),
            recency: VecDeque::new(),
            stats: CacheStats::default(),
        }
    }
}

impl<V: Identifiable> TimedLruCache<V> {
    /// Create a cache with the given configuration
    ///
    /// Fails with [`CacheError::InvalidConfig`] if the capacity is zero. A
    /// zero timeout is accepted and disables time-based expiry.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        info!("Initializing timed LRU cache with config: {:?}", config);

        Ok(Self {
            config,
            entries: HashMap::new(),
            recency: VecDeque::new(),
            stats: CacheStats::default(),
        })
    }

    /// Create a cache with an explicit capacity and timeout
    pub fn with_capacity_and_timeout(capacity: usize, timeout: Duration) -> Result<Self> {
        Self::new(CacheConfig::new(capacity, timeout))
    }

    /// Add a value to the cache
    ///
    /// Inserts a new entry for the value's id, or replaces the existing one,
    /// resetting both its freshness clock and its recency position. If the
    /// cache is over capacity afterwards, the least recently used entry is
    /// evicted silently.
    ///
    /// Returns `false` without changing state if the value's id is empty.
    pub fn put(&mut self, value: V) -> bool {
        self.put_at(value, Instant::now())
    }

    /// [`put`](Self::put) with an explicit clock reading
    pub fn put_at(&mut self, value: V, now: Instant) -> bool {
        if value.id().is_empty() {
            debug!("Rejecting value with empty id");
            return false;
        }

        self.sweep(now);

        let id = value.id().to_string();
        if let Some(entry) = self.entries.get_mut(&id) {
            debug!("Replacing cache entry: {}", id);
            entry.replace(value, now);
            self.stats.replacements += 1;
        } else {
            debug!("Inserting cache entry: {}", id);
            self.entries.insert(id.clone(), CacheEntry::new(value, now));
        }
        promote(&mut self.recency, &id);

        while self.entries.len() > self.config.capacity {
            match self.recency.pop_front() {
                Some(oldest) => {
                    debug!("Evicting least recently used entry: {}", oldest);
                    self.entries.remove(&oldest);
                    self.stats.evictions_capacity += 1;
                }
                None => break,
            }
        }

        true
    }

    /// Retrieve the value for `id`, refreshing its recency and freshness
    ///
    /// Fails with [`CacheError::NotFound`] if no live entry exists, either
    /// because the id was never inserted, or because the entry expired or
    /// was evicted. A successful `get` restarts the entry's freshness window
    /// and moves it to the most recently used position.
    pub fn get(&mut self, id: &str) -> Result<&V> {
        self.get_at(id, Instant::now())
    }

    /// [`get`](Self::get) with an explicit clock reading
    pub fn get_at(&mut self, id: &str, now: Instant) -> Result<&V> {
        self.sweep(now);

        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.refresh(now);
                promote(&mut self.recency, id);
                self.stats.hits += 1;
                debug!("Cache hit: {}", id);
                Ok(&entry.value)
            }
            None => {
                self.stats.misses += 1;
                debug!("Cache miss: {}", id);
                Err(CacheError::not_found(id))
            }
        }
    }

    /// Mark the entry for `id` as freshly used without reading it
    ///
    /// Restarts the freshness window and moves the entry to the most
    /// recently used position. Returns `false` if no live entry exists.
    pub fn touch(&mut self, id: &str) -> bool {
        self.touch_at(id, Instant::now())
    }

    /// [`touch`](Self::touch) with an explicit clock reading
    pub fn touch_at(&mut self, id: &str, now: Instant) -> bool {
        self.sweep(now);

        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.refresh(now);
                promote(&mut self.recency, id);
                debug!("Touched cache entry: {}", id);
                true
            }
            None => false,
        }
    }

    /// Read the value for `id` without refreshing recency or freshness
    ///
    /// Expired entries are invisible here too, though they are not removed
    /// until the next mutating operation sweeps them.
    pub fn peek(&self, id: &str) -> Option<&V> {
        self.peek_at(id, Instant::now())
    }

    /// [`peek`](Self::peek) with an explicit clock reading
    pub fn peek_at(&self, id: &str, now: Instant) -> Option<&V> {
        self.entries
            .get(id)
            .filter(|entry| !entry.is_expired(now, self.config.timeout))
            .map(|entry| &entry.value)
    }

    /// Check whether a live entry exists for `id`, without side effects
    pub fn contains(&self, id: &str) -> bool {
        self.peek(id).is_some()
    }

    /// Remove the entry for `id`, returning its value if one was stored
    pub fn remove(&mut self, id: &str) -> Option<V> {
        let entry = self.entries.remove(id)?;
        self.recency.retain(|k| k != id);
        debug!("Removed cache entry: {}", id);
        Some(entry.value)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.recency.clear();
        info!("Cleared {} entries from cache", count);
    }

    /// Remove all expired entries, returning how many were dropped
    ///
    /// Expiry is otherwise lazy: stale entries are swept at the start of
    /// every `put`/`get`/`touch`, never by a background timer. A host that
    /// wants to reclaim space on its own schedule can call this directly.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep(Instant::now())
    }

    /// [`sweep_expired`](Self::sweep_expired) with an explicit clock reading
    pub fn sweep_expired_at(&mut self, now: Instant) -> usize {
        self.sweep(now)
    }

    /// Number of entries currently stored, including not-yet-swept stale ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries the cache can hold
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Freshness timeout; zero means entries never expire by time
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Snapshot of the hit/miss/eviction counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Internal: drop every entry whose age exceeds the timeout
    fn sweep(&mut self, now: Instant) -> usize {
        if !self.config.expires() {
            return 0;
        }

        let timeout = self.config.timeout;
        let before = self.entries.len();
        self.entries.retain(|id, entry| {
            let stale = entry.is_expired(now, timeout);
            if stale {
                debug!("Cache entry expired: {}", id);
            }
            !stale
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            self.recency.retain(|id| self.entries.contains_key(id));
            self.stats.evictions_ttl += removed as u64;
            debug!("Swept {} expired entries", removed);
        }
        removed
    }
}

/// Move `id` to the most recently used end of the recency queue
fn promote(recency: &mut VecDeque<String>, id: &str) {
    recency.retain(|k| k != id);
    recency.push_back(id.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize, timeout: Duration) -> TimedLruCache<String> {
        TimedLruCache::with_capacity_and_timeout(capacity, timeout).unwrap()
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = cache(10, Duration::from_secs(60));

        assert!(cache.put("alpha".to_string()));
        assert_eq!(cache.get("alpha").unwrap(), "alpha");

        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_get_missing_id() {
        let mut cache = cache(10, Duration::from_secs(60));

        let err = cache.get("nothing").unwrap_err();
        assert!(matches!(err, CacheError::NotFound { .. }));
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut cache = cache(10, Duration::from_secs(60));

        assert!(!cache.put(String::new()));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_eviction_order() {
        let mut cache = cache(3, Duration::from_secs(60));

        cache.put("a".to_string());
        cache.put("b".to_string());
        cache.put("c".to_string());
        cache.put("d".to_string());

        assert_eq!(cache.len(), 3);
        assert!(cache.get("a").is_err());
        assert!(cache.get("b").is_ok());
        assert!(cache.get("c").is_ok());
        assert!(cache.get("d").is_ok());
        assert_eq!(cache.stats().evictions_capacity, 1);
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = cache(2, Duration::from_secs(60));

        cache.put("a".to_string());
        cache.put("b".to_string());
        cache.get("a").unwrap();
        cache.put("c".to_string());

        // "b" was the least recently used once "a" was read
        assert!(cache.get("b").is_err());
        assert!(cache.get("a").is_ok());
        assert!(cache.get("c").is_ok());
    }

    #[test]
    fn test_ttl_expiry_with_simulated_clock() {
        let mut cache = cache(10, Duration::from_millis(100));
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        assert!(cache.get_at("a", t0 + Duration::from_millis(50)).is_ok());

        // The read at t0+50ms restarted the freshness window
        let err = cache
            .get_at("a", t0 + Duration::from_millis(151))
            .unwrap_err();
        assert!(matches!(err, CacheError::NotFound { .. }));
        assert_eq!(cache.stats().evictions_ttl, 1);
    }

    #[test]
    fn test_touch_extends_life() {
        let mut cache = cache(10, Duration::from_secs(10));
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        assert!(cache.touch_at("a", t0 + Duration::from_secs(9)));
        assert!(cache.get_at("a", t0 + Duration::from_secs(15)).is_ok());
    }

    #[test]
    fn test_touch_missing_is_soft_failure() {
        let mut cache = cache(10, Duration::from_secs(60));
        assert!(!cache.touch("never-inserted"));
    }

    #[test]
    fn test_touch_expired_is_soft_failure() {
        let mut cache = cache(10, Duration::from_secs(1));
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        assert!(!cache.touch_at("a", t0 + Duration::from_secs(2)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_replace_keeps_size() {
        let mut cache = cache(10, Duration::from_secs(60));

        cache.put("a".to_string());
        cache.put("a".to_string());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().replacements, 1);
    }

    #[test]
    fn test_replace_resets_recency() {
        let mut cache = cache(2, Duration::from_secs(60));

        cache.put("a".to_string());
        cache.put("b".to_string());
        cache.put("a".to_string());
        cache.put("c".to_string());

        // Replacing "a" promoted it, so "b" was evicted
        assert!(cache.get("b").is_err());
        assert!(cache.get("a").is_ok());
        assert!(cache.get("c").is_ok());
    }

    #[test]
    fn test_zero_timeout_disables_expiry() {
        let mut cache = cache(10, Duration::ZERO);
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        assert!(cache.get_at("a", t0 + Duration::from_secs(86_400)).is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<TimedLruCache<String>> =
            TimedLruCache::with_capacity_and_timeout(0, Duration::from_secs(60));
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_peek_has_no_side_effects() {
        let mut cache = cache(2, Duration::from_secs(60));

        cache.put("a".to_string());
        cache.put("b".to_string());
        assert_eq!(cache.peek("a"), Some(&"a".to_string()));

        // The peek did not promote "a", so it is still the eviction victim
        cache.put("c".to_string());
        assert!(cache.get("a").is_err());
    }

    #[test]
    fn test_peek_hides_expired_entry() {
        let mut cache = cache(10, Duration::from_secs(1));
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        assert!(cache.peek_at("a", t0 + Duration::from_secs(2)).is_none());
        // Not swept yet, just invisible
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut cache = cache(10, Duration::from_secs(60));

        cache.put("a".to_string());
        assert_eq!(cache.remove("a"), Some("a".to_string()));
        assert_eq!(cache.remove("a"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cache = cache(10, Duration::from_secs(60));

        cache.put("a".to_string());
        cache.put("b".to_string());
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("a").is_err());
    }

    #[test]
    fn test_sweep_expired() {
        let mut cache = cache(10, Duration::from_secs(1));
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        cache.put_at("b".to_string(), t0);
        cache.put_at("c".to_string(), t0 + Duration::from_secs(1));

        let removed = cache.sweep_expired_at(t0 + Duration::from_millis(1500));
        assert_eq!(removed, 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_default_configuration() {
        let cache: TimedLruCache<String> = TimedLruCache::default();
        assert_eq!(cache.capacity(), 32);
        assert_eq!(cache.timeout(), Duration::from_secs(180));
    }

    #[test]
    fn test_recency_matches_entries_after_mixed_workload() {
        let mut cache = cache(4, Duration::from_millis(100));
        let t0 = Instant::now();

        cache.put_at("a".to_string(), t0);
        cache.put_at("b".to_string(), t0);
        cache.touch_at("a", t0 + Duration::from_millis(10));
        cache.put_at("c".to_string(), t0 + Duration::from_millis(20));
        cache.remove("b");
        cache.put_at("d".to_string(), t0 + Duration::from_millis(200));

        // "c" and "a" expired at t0+200ms relative to their last refresh
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("d"));
    }
}
