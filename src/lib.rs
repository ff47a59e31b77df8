//! # timed-lru
//!
//! A fixed-capacity, time-expiring object cache keyed by a caller-supplied
//! stable identifier, combining least-recently-used (LRU) eviction with
//! per-entry time-to-live (TTL) expiry.
//!
//! ## Features
//!
//! - **LRU eviction**: when the cache is over capacity, the least recently
//!   used entry is removed silently
//! - **TTL expiry**: entries that go unrefreshed for longer than the timeout
//!   are purged lazily on the next operation, never by a background timer
//! - **Capability-based keys**: any type can be cached by implementing
//!   [`Identifiable`], a single-method trait returning a stable string id
//! - **Simulated time**: every operation has an `*_at` variant taking an
//!   explicit [`Instant`](std::time::Instant), so tests never sleep
//! - **Metrics**: hit/miss/eviction counters via [`CacheStats`]
//!
//! ## Example
//!
//! ```rust
//! use timed_lru::{CacheConfig, Identifiable, TimedLruCache};
//! use std::time::Duration;
//!
//! struct Page {
//!     title: String,
//!     body: String,
//! }
//!
//! impl Identifiable for Page {
//!     fn id(&self) -> &str {
//!         &self.title
//!     }
//! }
//!
//! # fn example() -> timed_lru::Result<()> {
//! let config = CacheConfig::builder()
//!     .capacity(64)
//!     .timeout(Duration::from_secs(300)) // 5 minutes
//!     .build();
//!
//! let mut cache = TimedLruCache::new(config)?;
//!
//! cache.put(Page {
//!     title: "Rust (programming language)".to_string(),
//!     body: "...".to_string(),
//! });
//!
//! // Reading an entry restarts its freshness window and marks it
//! // most recently used
//! let page = cache.get("Rust (programming language)")?;
//! println!("{}", page.body);
//!
//! // `touch` refreshes without reading; missing ids are a soft failure
//! assert!(cache.touch("Rust (programming language)"));
//! assert!(!cache.touch("no such page"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! The cache is a plain synchronous data structure. `put`, `get`, and `touch`
//! each read then write shared state, so a host that shares one cache across
//! workers must serialize access, for example behind a `Mutex` or by routing
//! all operations through a single owner.

pub mod config;
pub mod entry;
pub mod error;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use config::{CacheConfig, CacheConfigBuilder, DEFAULT_CAPACITY, DEFAULT_TIMEOUT};
pub use entry::CacheEntry;
pub use error::{CacheError, Result};
pub use store::TimedLruCache;
pub use types::{CacheStats, Identifiable};
