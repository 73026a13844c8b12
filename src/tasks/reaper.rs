//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::cache::{CacheConfig, EntryStore};

/// Spawns the reaper for `store` on `runtime`.
///
/// The first tick fires one `reap_interval` after spawning, never
/// immediately. Each tick removes entries whose age is at least `ttl`, so an
/// entry lives between `ttl` and `ttl + reap_interval`.
///
/// The task exits when `true` is published on `shutdown` or when the sender
/// is dropped. It never reports errors; a skipped tick just delays eviction.
pub(crate) fn spawn_reaper(
    runtime: &Handle,
    store: Arc<EntryStore>,
    config: CacheConfig,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let CacheConfig { ttl, reap_interval } = config;

    runtime.spawn(async move {
        debug!(?ttl, ?reap_interval, "Starting cache reaper");

        let mut ticker = interval_at(Instant::now() + reap_interval, reap_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Instant::now();
                    let removed = store.delete_if(|_, entry| entry.is_stale(ttl, now));

                    if removed > 0 {
                        info!("Cache reap: removed {} stale entries", removed);
                    } else {
                        trace!("Cache reap: no stale entries found");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::time::Duration;
    use tokio::time::sleep;

    fn config(ttl_ms: u64, reap_ms: u64) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_millis(ttl_ms),
            reap_interval: Duration::from_millis(reap_ms),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_stale_entries() {
        let store = Arc::new(EntryStore::new());
        store.set("expire_soon".to_string(), Bytes::from_static(b"value"));

        let (_tx, rx) = watch::channel(false);
        let handle = spawn_reaper(&Handle::current(), store.clone(), config(1000, 1000), rx);

        sleep(Duration::from_millis(1500)).await;

        assert!(store.get("expire_soon").is_none(), "Stale entry should have been reaped");
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let store = Arc::new(EntryStore::new());
        store.set("long_lived".to_string(), Bytes::from_static(b"value"));

        let (_tx, rx) = watch::channel(false);
        let handle = spawn_reaper(&Handle::current(), store.clone(), config(3_600_000, 1000), rx);

        sleep(Duration::from_millis(2500)).await;

        assert_eq!(store.get("long_lived"), Some(Bytes::from_static(b"value")));
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_does_not_tick_immediately() {
        let store = Arc::new(EntryStore::new());
        store.set("k".to_string(), Bytes::from_static(b"v"));

        // A zero-age entry is stale under a zero TTL, but no tick has happened yet
        let (_tx, rx) = watch::channel(false);
        let cfg = CacheConfig {
            ttl: Duration::ZERO,
            reap_interval: Duration::from_millis(100),
        };
        let handle = spawn_reaper(&Handle::current(), store.clone(), cfg, rx);

        sleep(Duration::from_millis(50)).await;
        assert_eq!(store.len(), 1);

        sleep(Duration::from_millis(60)).await;
        assert_eq!(store.len(), 0);
        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_stops_on_shutdown_signal() {
        let store = Arc::new(EntryStore::new());
        let (tx, rx) = watch::channel(false);
        let handle = spawn_reaper(&Handle::current(), store, config(1000, 1000), rx);

        tx.send_replace(true);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should stop after shutdown signal")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_stops_when_sender_dropped() {
        let store = Arc::new(EntryStore::new());
        let (tx, rx) = watch::channel(false);
        let handle = spawn_reaper(&Handle::current(), store, config(1000, 1000), rx);

        drop(tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should stop once the sender is gone")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_can_be_aborted() {
        let store = Arc::new(EntryStore::new());
        let (_tx, rx) = watch::channel(false);
        let handle = spawn_reaper(&Handle::current(), store, config(1000, 1000), rx);

        handle.abort();

        sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
