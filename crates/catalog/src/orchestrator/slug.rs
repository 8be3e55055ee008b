//! Slug assignment.
//!
//! Turns a display name into a slug that no stored entry uses yet by probing
//! the store with `base`, `base-1`, `base-2`, ...

use std::sync::Arc;

use catalog_core::catalog::{slug_candidate, slugify, CatalogError};
use catalog_core::storage::EntryRepository;
use tokio_util::sync::CancellationToken;

use super::cancel::cancellable;

/// Probes allowed per assignment, the bare base slug included.
pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 1000;

/// Finds the first free slug for a name.
///
/// The probe is not atomic with the subsequent insert. Two concurrent creates
/// may pick the same candidate; the store's unique constraint then rejects
/// the loser.
#[derive(Clone)]
pub struct SlugAssigner {
    repository: Arc<dyn EntryRepository>,
    max_attempts: u32,
}

impl SlugAssigner {
    /// `max_attempts` is clamped to at least one probe.
    pub fn new(repository: Arc<dyn EntryRepository>, max_attempts: u32) -> Self {
        Self {
            repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns a slug unused at probe time.
    ///
    /// # Errors
    ///
    /// - `Conflict` when every candidate within the attempt bound is taken
    /// - `Internal` when a probe fails; a failed probe is never read as "absent"
    /// - `Cancelled` when `cancel` fires mid-probe
    pub async fn assign(
        &self,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<String, CatalogError> {
        let base = slugify(name);

        for attempt in 0..self.max_attempts {
            let candidate = slug_candidate(&base, attempt);

            match cancellable(cancel, self.repository.get_by_slug(&candidate)).await? {
                Ok(None) => {
                    tracing::debug!(slug = %candidate, attempt, "Assigned slug");
                    return Ok(candidate);
                }
                Ok(Some(_)) => {
                    tracing::trace!(slug = %candidate, "Slug taken");
                }
                Err(err) => {
                    tracing::error!(slug = %candidate, error = %err, "Slug probe failed");
                    return Err(CatalogError::Internal);
                }
            }
        }

        tracing::warn!(
            base = %base,
            max_attempts = self.max_attempts,
            "No free slug within attempt bound"
        );
        Err(CatalogError::Conflict)
    }
}
