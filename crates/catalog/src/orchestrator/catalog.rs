//! Catalog orchestrator.
//!
//! Implements the cache-aside pattern over an [`EntryRepository`] and a
//! [`Cache`]:
//! - **Reads**: check the cache first; on a miss fetch from the store and
//!   populate the cache best-effort.
//! - **Writes**: go straight to the store. Whether the cache is invalidated
//!   afterwards depends on the [`CachePolicy`].

use std::sync::Arc;
use std::time::Duration;

use catalog_core::cache::{deserialize_entry, entry_key, serialize_entry, Cache};
use catalog_core::catalog::{CatalogError, Entry};
use catalog_core::storage::{EntryRepository, RepositoryError};
use tokio_util::sync::CancellationToken;

use super::cancel::cancellable;
use super::slug::{SlugAssigner, DEFAULT_MAX_SLUG_ATTEMPTS};

/// What writes do to cached projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Writes leave the cache alone; reads may be stale until the TTL lapses.
    #[default]
    ReadThrough,
    /// Update and delete drop the entry's cache key after the store commits.
    InvalidateOnWrite,
}

/// Coordinates slug assignment, the durable store and the cache.
///
/// Holds no mutable state of its own and is shared across request tasks
/// behind an `Arc`.
pub struct CatalogOrchestrator {
    repository: Arc<dyn EntryRepository>,
    cache: Arc<dyn Cache>,
    slugs: SlugAssigner,
    ttl: Duration,
    policy: CachePolicy,
}

impl CatalogOrchestrator {
    /// Creates an orchestrator with the default policy and slug attempt bound.
    ///
    /// # Arguments
    ///
    /// * `repository` - The durable store
    /// * `cache` - The cache holding entry projections
    /// * `ttl` - Time-to-live for cached entries
    pub fn new(repository: Arc<dyn EntryRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            slugs: SlugAssigner::new(repository.clone(), DEFAULT_MAX_SLUG_ATTEMPTS),
            repository,
            cache,
            ttl,
            policy: CachePolicy::default(),
        }
    }

    /// Sets what update and delete do to cached entries.
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bounds the slug probes per create, the base slug included.
    pub fn with_max_slug_attempts(mut self, max_attempts: u32) -> Self {
        self.slugs = SlugAssigner::new(self.repository.clone(), max_attempts);
        self
    }

    /// Stores a new entry under a freshly assigned slug.
    ///
    /// Only `name` and `price` are taken from `entry`. The returned entry
    /// carries the store-assigned `id` and timestamps. The cache is not
    /// populated.
    pub async fn create(
        &self,
        entry: Entry,
        cancel: &CancellationToken,
    ) -> Result<Entry, CatalogError> {
        let slug = self.slugs.assign(&entry.name, cancel).await?;
        let pending = Entry::new(entry.name, entry.price).with_slug(slug);

        let stored = cancellable(cancel, self.repository.insert(&pending))
            .await?
            .map_err(|err| store_failure("insert", err))?;

        tracing::info!(entry_id = stored.id, slug = %stored.slug, "Created entry");
        Ok(stored)
    }

    /// Replaces `name` and `price` of the entry with `entry.id`.
    ///
    /// The slug is never recomputed.
    pub async fn update(
        &self,
        entry: Entry,
        cancel: &CancellationToken,
    ) -> Result<Entry, CatalogError> {
        let stored = cancellable(cancel, self.repository.update(&entry))
            .await?
            .map_err(|err| store_failure("update", err))?;

        tracing::info!(entry_id = stored.id, slug = %stored.slug, "Updated entry");
        if self.policy == CachePolicy::InvalidateOnWrite {
            self.invalidate(&stored.slug, cancel).await;
        }
        Ok(stored)
    }

    /// Removes the entry with `id`.
    pub async fn delete(&self, id: i64, cancel: &CancellationToken) -> Result<(), CatalogError> {
        let removed = cancellable(cancel, self.repository.delete(id))
            .await?
            .map_err(|err| store_failure("delete", err))?;

        tracing::info!(entry_id = removed.id, slug = %removed.slug, "Deleted entry");
        if self.policy == CachePolicy::InvalidateOnWrite {
            self.invalidate(&removed.slug, cancel).await;
        }
        Ok(())
    }

    /// Looks an entry up by slug, cache first.
    ///
    /// Cache failures and undecodable cached values count as misses.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        cancel: &CancellationToken,
    ) -> Result<Entry, CatalogError> {
        let cache_key = entry_key(slug);

        match cancellable(cancel, self.cache.get(&cache_key)).await? {
            Ok(Some(bytes)) => match deserialize_entry(&bytes) {
                Ok(entry) => {
                    tracing::trace!(slug = %slug, "Cache hit for entry");
                    return Ok(entry);
                }
                Err(err) => {
                    tracing::warn!(slug = %slug, error = %err, "Cache entry deserialization failed");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(slug = %slug, error = %err, "Cache lookup failed");
            }
        }

        tracing::trace!(slug = %slug, "Cache miss for entry");
        let entry = cancellable(cancel, self.repository.get_by_slug(slug))
            .await?
            .map_err(|err| store_failure("get_by_slug", err))?
            .ok_or(CatalogError::NotFound)?;

        self.populate(&cache_key, &entry, cancel).await;
        Ok(entry)
    }

    /// Best-effort cache write. The entry is already in hand, so neither a
    /// failure nor cancellation is reported to the caller.
    async fn populate(&self, cache_key: &str, entry: &Entry, cancel: &CancellationToken) {
        let bytes = match serialize_entry(entry) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(slug = %entry.slug, error = %err, "Failed to serialize entry");
                return;
            }
        };

        match cancellable(cancel, self.cache.set(cache_key, &bytes, Some(self.ttl))).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!(slug = %entry.slug, error = %err, "Failed to cache entry");
            }
            Err(_) => {
                tracing::warn!(slug = %entry.slug, "Cache write cancelled");
            }
        }
    }

    /// Best-effort cache invalidation after a committed write.
    async fn invalidate(&self, slug: &str, cancel: &CancellationToken) {
        match cancellable(cancel, self.cache.delete(&entry_key(slug))).await {
            Ok(Ok(())) => tracing::trace!(slug = %slug, "Invalidated cached entry"),
            Ok(Err(err)) => {
                tracing::warn!(slug = %slug, error = %err, "Failed to invalidate cached entry");
            }
            Err(_) => tracing::warn!(slug = %slug, "Cache invalidation cancelled"),
        }
    }
}

/// Translates a store failure, logging the detail that the caller never sees.
fn store_failure(operation: &'static str, err: RepositoryError) -> CatalogError {
    let mapped = CatalogError::from(&err);
    match mapped {
        CatalogError::Internal => {
            tracing::error!(operation, error = %err, "Store operation failed");
        }
        _ => {
            tracing::debug!(operation, error = %err, "Store rejected operation");
        }
    }
    mapped
}
