//! Shared application state.
//!
//! Holds the catalog orchestrator, the backends probed by `/health`, and the
//! root cancellation token. Backends are chosen at compile time via feature
//! flags (see `storage` and `cache`).

use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;

use catalog_core::cache::Cache;
use catalog_core::health::HealthCheck;
use catalog_core::storage::EntryRepository;

use crate::config::Config;
use crate::orchestrator::CatalogOrchestrator;

/// Shared application state.
///
/// Cloned for each request handler; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations (slug assignment, cache-aside reads, writes).
    pub catalog: Arc<CatalogOrchestrator>,
    /// Backends pinged by the health endpoint.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
    /// Root token; cancelled on shutdown. Request tokens are its children.
    pub shutdown: CancellationToken,
    /// Deadline applied to each request's cancellation token.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState from its parts.
    pub fn build(
        catalog: Arc<CatalogOrchestrator>,
        health_checks: Vec<Arc<dyn HealthCheck>>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            health_checks,
            shutdown: CancellationToken::new(),
            request_timeout,
        }
    }

    /// Wires a store and a cache into an orchestrator configured from `config`.
    fn assemble<R, C>(repository: Arc<R>, cache: Arc<C>, config: &Config) -> Self
    where
        R: EntryRepository + HealthCheck + 'static,
        C: Cache + HealthCheck + 'static,
    {
        let catalog = CatalogOrchestrator::new(repository.clone(), cache.clone(), config.cache_ttl())
            .with_policy(config.cache_policy())
            .with_max_slug_attempts(config.max_slug_attempts);

        let health_checks = vec![
            repository as Arc<dyn HealthCheck>,
            cache as Arc<dyn HealthCheck>,
        ];

        Self::build(Arc::new(catalog), health_checks, config.request_timeout())
    }

    /// Opens the compiled-in store and cache backends.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repository = open_repository(config).await?;
        let cache = open_cache(config).await?;

        tracing::info!(
            store = repository.name(),
            cache = cache.name(),
            cache_ttl = ?config.cache_ttl(),
            cache_policy = ?config.cache_policy(),
            "Initialized backends"
        );

        Ok(Self::assemble(repository, cache, config))
    }
}

// ============================================================================
// Backend factories, one per feature flag
// ============================================================================

#[cfg(feature = "inmemory")]
async fn open_repository(
    _config: &Config,
) -> Result<Arc<crate::storage::InMemoryRepository>, anyhow::Error> {
    Ok(Arc::new(crate::storage::InMemoryRepository::new()))
}

#[cfg(feature = "sqlite")]
async fn open_repository(
    config: &Config,
) -> Result<Arc<crate::storage::SqliteRepository>, anyhow::Error> {
    let repository = crate::storage::SqliteRepository::new(&config.sqlite_path).await?;
    Ok(Arc::new(repository))
}

#[cfg(feature = "memory")]
async fn open_cache(config: &Config) -> Result<Arc<crate::cache::MemoryCache>, anyhow::Error> {
    Ok(Arc::new(crate::cache::MemoryCache::new(
        config.cache_max_entries,
    )))
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> Result<Arc<crate::cache::RedisCache>, anyhow::Error> {
    let cache = crate::cache::RedisCache::new(&config.redis_url).await?;
    Ok(Arc::new(cache))
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
