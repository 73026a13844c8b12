//! Cache Facade
//!
//! The public handle over the entry store. Owns the store and the reaper task
//! that expires entries in the background.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, EntryStore};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper;

/// Longest accepted TTL or reap period. Larger periods cannot be scheduled on
/// every platform's clock.
pub const MAX_CACHE_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

// == Cache Config ==
/// Expiry settings for a [`Cache`].
///
/// `ttl` is how old an entry must be before the reaper may remove it;
/// `reap_interval` is how often the reaper wakes. [`Cache::new`] uses the same
/// value for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub reap_interval: Duration,
}

impl CacheConfig {
    /// Uses `interval` as both the TTL and the reaper period.
    pub fn uniform(interval: Duration) -> Self {
        Self {
            ttl: interval,
            reap_interval: interval,
        }
    }

    // == Validate ==
    /// Rejects zero durations and anything above [`MAX_CACHE_INTERVAL`].
    /// A zero period would spin the reaper.
    pub fn validate(&self) -> Result<()> {
        check_interval("cache TTL", self.ttl)?;
        check_interval("cache reap interval", self.reap_interval)
    }
}

fn check_interval(what: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(PokedexError::InvalidConfig(format!(
            "{what} must be greater than zero"
        )));
    }
    if value > MAX_CACHE_INTERVAL {
        return Err(PokedexError::InvalidConfig(format!(
            "{what} must be at most {}s, got {}s",
            MAX_CACHE_INTERVAL.as_secs(),
            value.as_secs()
        )));
    }
    Ok(())
}

#[derive(Debug)]
struct Inner {
    store: Arc<EntryStore>,
    config: CacheConfig,
    /// `true` once closed. Dropping the sender also stops the reaper.
    shutdown: watch::Sender<bool>,
    #[cfg_attr(not(test), allow(dead_code))]
    reaper: JoinHandle<()>,
}

// == Cache ==
/// Time-bounded, thread-safe response cache keyed by request URL.
///
/// Clones share the same store. An entry stays readable for at least `ttl`
/// after it was added and is removed by the reaper at most one
/// `reap_interval` after that.
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<Inner>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose TTL and reap period are both `interval`.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// - `InvalidConfig` if `interval` is zero
    /// - `NoRuntime` if no Tokio runtime is active
    pub fn new(interval: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::uniform(interval))
    }

    /// Creates a cache with independent TTL and reap period.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;

        let store = Arc::new(EntryStore::new());
        let (shutdown, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(&runtime, store.clone(), config, shutdown_rx);

        Ok(Self {
            inner: Arc::new(Inner {
                store,
                config,
                shutdown,
                reaper,
            }),
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its age. A no-op once the cache is closed.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        if !self.inner.store.set(key.into(), value.into()) {
            debug!("Ignoring add on closed cache");
        }
    }

    // == Get ==
    /// Returns the cached value for `key`, or `None` if absent or closed.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.inner.store.get(key)
    }

    // == Close ==
    /// Stops the reaper and drops all entries. Idempotent.
    ///
    /// The store is sealed under its lock, so an `add` racing `close` either
    /// lands before the entries are dropped or is refused.
    pub fn close(&self) {
        self.inner.shutdown.send_replace(true);
        if self.inner.store.close() {
            info!("Cache closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.store.is_closed()
    }

    pub fn config(&self) -> CacheConfig {
        self.inner.config
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.store.stats()
    }

    pub fn len(&self) -> usize {
        self.inner.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.store.is_empty()
    }

    #[cfg(test)]
    fn reaper_finished(&self) -> bool {
        self.inner.reaper.is_finished()
    }
}
