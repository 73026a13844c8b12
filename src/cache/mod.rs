//! Cache Module
//!
//! Provides an in-memory response cache whose entries are expired by a
//! background reaper instead of on the read path.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::{Cache, CacheConfig, MAX_CACHE_INTERVAL};
pub use stats::CacheStats;
pub use store::EntryStore;

// == Public Constants ==
/// Default TTL and reap period for API responses
pub const DEFAULT_CACHE_INTERVAL_SECS: u64 = 300;
