use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key/value cache with per-key expiry.
///
/// The cache is a best-effort accelerator: a missing key, an expired key and a
/// failed lookup are all equivalent to "not cached" for callers.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. `None` is a miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
