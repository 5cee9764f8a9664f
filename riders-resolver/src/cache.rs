//! TTL memoization of resolved id sets.
//!
//! Only the expensive "which ids are visible" computation is cached, keyed
//! by `(rider, filter signature)`. Positions are never cached: the engine
//! re-fetches live coordinates for every id on every call.
use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;

use riders_shared::types::RiderId;
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::errors::ResolverError;

/// How long a resolved id set stays valid. Open parameter: nothing
/// observable pins this value.
pub const DEFAULT_ID_SET_TTL: Duration = Duration::from_secs(30);

struct CacheEntry {
    ids: Vec<RiderId>,
    expires_at: Instant,
}

/// Per-rider TTL cache of resolved id sets, shared between rider sessions
/// via `Arc` and flushable as a whole.
pub struct IdSetCache {
    ttl: Duration,
    entries: RwLock<HashMap<(RiderId, String), CacheEntry>>,
}

impl IdSetCache {
    /// Create a cache with the given entry TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a cache with [`DEFAULT_ID_SET_TTL`].
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_ID_SET_TTL)
    }

    /// Return the cached id list for `(rider, signature)` if fresh,
    /// otherwise await `compute`, store its result with the TTL, and return
    /// it.
    ///
    /// The lock is never held across the `compute` await; two racing misses
    /// for the same key both compute and the later store wins, which is
    /// harmless for a memoization cache.
    pub async fn resolve<F, Fut>(
        &self,
        rider: RiderId,
        signature: &str,
        compute: F,
    ) -> Result<Vec<RiderId>, ResolverError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RiderId>, ResolverError>>,
    {
        let key = (rider, signature.to_string());
        if let Some(ids) = self.fresh(&key) {
            debug!(rider, signature, "id-set cache hit");
            return Ok(ids);
        }

        debug!(rider, signature, "id-set cache miss");
        let ids = compute().await?;
        self.entries.write().unwrap().insert(
            key,
            CacheEntry {
                ids: ids.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(ids)
    }

    /// Clear every entry for every rider at once.
    pub fn flush_all(&self) {
        self.entries.write().unwrap().clear();
        debug!("id-set cache flushed");
    }

    fn fresh(&self, key: &(RiderId, String)) -> Option<Vec<RiderId>> {
        let entries = self.entries.read().unwrap();
        entries
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.ids.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    async fn resolve_counted(
        cache: &IdSetCache,
        rider: RiderId,
        signature: &str,
        computes: &AtomicUsize,
        ids: Vec<RiderId>,
    ) -> Vec<RiderId> {
        cache
            .resolve(rider, signature, || {
                computes.fetch_add(1, Ordering::SeqCst);
                let ids = ids.clone();
                async move { Ok(ids) }
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_second_resolve_hits_the_cache() {
        let cache = IdSetCache::with_default_ttl();
        let computes = AtomicUsize::new(0);

        let first = resolve_counted(&cache, 10101, "", &computes, vec![1, 2, 3]).await;
        let second = resolve_counted(&cache, 10101, "", &computes, vec![9, 9, 9]).await;

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![1, 2, 3]);
        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_keys_are_isolated_by_rider_and_signature() {
        let cache = IdSetCache::with_default_ttl();
        let computes = AtomicUsize::new(0);

        resolve_counted(&cache, 10101, "", &computes, vec![1]).await;
        resolve_counted(&cache, 20102, "", &computes, vec![2]).await;
        resolve_counted(&cache, 10101, "name:smith", &computes, vec![3]).await;

        assert_eq!(computes.load(Ordering::SeqCst), 3);
        assert_eq!(
            resolve_counted(&cache, 10101, "", &computes, vec![0]).await,
            vec![1]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_after_the_ttl() {
        let cache = IdSetCache::new(Duration::from_secs(30));
        let computes = AtomicUsize::new(0);

        resolve_counted(&cache, 10101, "", &computes, vec![1]).await;
        tokio::time::advance(Duration::from_secs(31)).await;
        let recomputed = resolve_counted(&cache, 10101, "", &computes, vec![2]).await;

        assert_eq!(recomputed, vec![2]);
        assert_eq!(computes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_flush_all_clears_every_rider() {
        let cache = IdSetCache::with_default_ttl();
        let computes = AtomicUsize::new(0);

        resolve_counted(&cache, 10101, "", &computes, vec![1]).await;
        resolve_counted(&cache, 20102, "all", &computes, vec![2]).await;
        cache.flush_all();
        resolve_counted(&cache, 10101, "", &computes, vec![3]).await;
        resolve_counted(&cache, 20102, "all", &computes, vec![4]).await;

        assert_eq!(computes.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_compute_failure_is_not_cached() {
        let cache = IdSetCache::with_default_ttl();
        let result = cache
            .resolve(10101, "", || async {
                Err(ResolverError::Source(riders_sources::SourceError::Backend(
                    "down".to_string(),
                )))
            })
            .await;
        assert!(result.is_err());

        let computes = AtomicUsize::new(0);
        let ids = resolve_counted(&cache, 10101, "", &computes, vec![5]).await;
        assert_eq!(ids, vec![5]);
        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }
}
