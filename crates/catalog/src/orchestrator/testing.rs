//! Hand-written store and cache doubles that count their calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use catalog_core::cache::{Cache, CacheError, Result as CacheResult};
use catalog_core::catalog::Entry;
use catalog_core::storage::{EntryRepository, RepositoryError, Result};

#[derive(Default)]
pub(crate) struct MockRepository {
    rows: RwLock<HashMap<i64, Entry>>,
    last_id: AtomicUsize,
    pub get_by_slug_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// Every call fails with this error when set.
    failure: Option<RepositoryError>,
    /// Probes always report "absent", as if another writer raced us.
    blind_probe: bool,
    probe_delay: Option<Duration>,
    /// Mutations sleep before touching any row.
    write_delay: Option<Duration>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: RepositoryError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn blind_probe() -> Self {
        Self {
            blind_probe: true,
            ..Self::default()
        }
    }

    pub fn slow_probe(delay: Duration) -> Self {
        Self {
            probe_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn slow_writes(delay: Duration) -> Self {
        Self {
            write_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Inserts a row directly, bypassing the counters.
    pub async fn seed(&self, name: &str, slug: &str, price: u64) -> Entry {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let now = Utc::now();
        let entry = Entry::new(name, price)
            .with_id(id)
            .with_slug(slug)
            .with_created_at(now)
            .with_updated_at(now);
        self.rows.write().await.insert(id, entry.clone());
        entry
    }

    pub async fn row(&self, id: i64) -> Option<Entry> {
        self.rows.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    async fn stall(&self) {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Entry",
        id: id.to_string(),
    }
}

#[async_trait]
impl EntryRepository for MockRepository {
    async fn insert(&self, entry: &Entry) -> Result<Entry> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.stall().await;
        self.check()?;
        if self.rows.read().await.values().any(|e| e.slug == entry.slug) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Entry",
                id: entry.slug.clone(),
            });
        }
        Ok(self.seed(&entry.name, &entry.slug, entry.price).await)
    }

    async fn update(&self, entry: &Entry) -> Result<Entry> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.stall().await;
        self.check()?;
        let mut rows = self.rows.write().await;
        let stored = rows.get_mut(&entry.id).ok_or_else(|| not_found(entry.id))?;
        stored.name = entry.name.clone();
        stored.price = entry.price;
        stored.updated_at = Some(Utc::now());
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<Entry> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.stall().await;
        self.check()?;
        self.rows.write().await.remove(&id).ok_or_else(|| not_found(id))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Entry>> {
        self.get_by_slug_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.probe_delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        if self.blind_probe {
            return Ok(None);
        }
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|e| e.slug == slug)
            .cloned())
    }
}

#[derive(Default)]
pub(crate) struct MockCache {
    pub store: RwLock<HashMap<String, Vec<u8>>>,
    pub get_calls: AtomicUsize,
    pub set_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// TTL passed to each `set`, in call order.
    pub ttls: RwLock<Vec<Option<Duration>>>,
    failing: bool,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache whose every operation fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing {
            Err(CacheError::ConnectionFailed("cache offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.ttls.write().await.push(ttl);
        self.check()?;
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.store.write().await.remove(key);
        Ok(())
    }
}
