//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the moment it was stored.
///
/// Entries are never mutated after insertion; a second `add` for the same
/// key builds a fresh entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// Insertion instant (monotonic)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has lived for at least `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is stale,
    /// so a reap that runs one full TTL after insertion removes it.
    pub fn is_stale(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) >= ttl
    }
}
