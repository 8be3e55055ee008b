use async_trait::async_trait;

use crate::catalog::Entry;

use super::Result;

/// Durable, authoritative storage for catalog entries.
///
/// Implementations own `id` and the timestamps; callers never set them.
/// Uniqueness of `slug` is established by the caller before `insert`, but a
/// store may also reject a duplicate slug with `RepositoryError::AlreadyExists`.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Inserts a new entry and returns it with `id` and timestamps populated.
    async fn insert(&self, entry: &Entry) -> Result<Entry>;

    /// Updates `name` and `price` of the entry with `entry.id`.
    ///
    /// Returns the persisted row (slug and `created_at` untouched).
    async fn update(&self, entry: &Entry) -> Result<Entry>;

    /// Deletes an entry by its ID and returns the removed row.
    async fn delete(&self, id: i64) -> Result<Entry>;

    /// Gets an entry by its slug.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Entry>>;
}
