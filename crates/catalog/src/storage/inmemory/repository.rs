//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use catalog_core::catalog::Entry;
use catalog_core::health::HealthCheck;
use catalog_core::storage::{EntryRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Table {
    rows: HashMap<i64, Entry>,
    /// Last identifier handed out. Never decremented, so ids are not reused.
    last_id: i64,
}

/// In-memory entry store.
///
/// Enforces the same constraints as the SQLite schema: `slug` is unique and
/// identifiers grow monotonically.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Entry",
        id: id.to_string(),
    }
}

#[async_trait]
impl EntryRepository for InMemoryRepository {
    async fn insert(&self, entry: &Entry) -> Result<Entry> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|e| e.slug == entry.slug) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Entry",
                id: entry.slug.clone(),
            });
        }

        table.last_id += 1;
        let now = Utc::now();
        let stored = entry
            .clone()
            .with_id(table.last_id)
            .with_created_at(now)
            .with_updated_at(now);
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, entry: &Entry) -> Result<Entry> {
        let mut table = self.table.write().await;
        let stored = table.rows.get_mut(&entry.id).ok_or_else(|| not_found(entry.id))?;

        stored.name = entry.name.clone();
        stored.price = entry.price;
        stored.updated_at = Some(Utc::now());
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<Entry> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or_else(|| not_found(id))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Entry>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|e| e.slug == slug).cloned())
    }
}

#[async_trait]
impl HealthCheck for InMemoryRepository {
    fn name(&self) -> &'static str {
        "inmemory"
    }

    async fn ping(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}
