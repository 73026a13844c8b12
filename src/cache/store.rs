//! Entry Store Module
//!
//! HashMap storage guarded by a single mutex. Every operation takes the lock,
//! does a bounded amount of work and releases it before returning.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats};

/// Map, counters and the closed flag, always mutated together under one lock.
#[derive(Debug, Default)]
struct StoreState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
    closed: bool,
}

// == Entry Store ==
/// Serialized key-value storage for cached response bodies.
#[derive(Debug, Default)]
pub struct EntryStore {
    state: Mutex<StoreState>,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic while holding the lock cannot leave the map half-written,
    /// so a poisoned lock is recovered instead of propagated.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, stamping it with the current
    /// instant. Any previous value and timestamp are discarded.
    ///
    /// Returns `false` without storing anything once the store is closed.
    pub fn set(&self, key: String, value: Bytes) -> bool {
        let entry = CacheEntry::new(value);
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        state.entries.insert(key, entry);
        let len = state.entries.len();
        state.stats.set_total_entries(len);
        true
    }

    // == Get ==
    /// Returns the stored value for `key`.
    ///
    /// Expiry is never evaluated here; stale entries stay visible until the
    /// reaper removes them.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let mut state = self.lock();
        if state.closed {
            return None;
        }
        let value = state.entries.get(key).map(|entry| entry.value.clone());
        match value {
            Some(_) => state.stats.record_hit(),
            None => state.stats.record_miss(),
        }
        value
    }

    // == Delete If ==
    /// Removes every entry for which `predicate` returns true and returns the
    /// number removed.
    ///
    /// The predicate runs while the lock is held and must not call back into
    /// the cache.
    pub(crate) fn delete_if<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&str, &CacheEntry) -> bool,
    {
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|key, entry| !predicate(key, entry));
        let after = state.entries.len();
        let removed = before - after;

        state.stats.record_reaped(removed);
        state.stats.set_total_entries(after);
        removed
    }

    // == Close ==
    /// Drops every entry and refuses further writes. Counters other than
    /// `total_entries` are kept. Returns `false` if already closed.
    pub(crate) fn close(&self) -> bool {
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        state.closed = true;
        state.entries.clear();
        state.stats.set_total_entries(0);
        true
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}
