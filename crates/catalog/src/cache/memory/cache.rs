//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache with TTL support using
//! tokio synchronization primitives and LRU eviction policy.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use catalog_core::cache::{Cache, Result};
use catalog_core::health::HealthCheck;

/// A single cache slot with optional expiration.
#[derive(Debug, Clone)]
struct CacheSlot {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheSlot {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Expired slots are dropped lazily when they are next read. LRU eviction
/// bounds memory once `max_entries` is reached.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheSlot>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` keys.
    ///
    /// A capacity of `0` is treated as `1`.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // `LruCache::get` updates recency, so even reads need the write lock.
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(slot) if slot.is_expired() => {
                store.pop(key);
                Ok(None)
            }
            Some(slot) => Ok(Some(slot.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheSlot::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for MemoryCache {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}
