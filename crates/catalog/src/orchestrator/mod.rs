//! Catalog orchestration.
//!
//! Coordinates the durable store and the cache for every catalog operation:
//! slug assignment on create, cache-aside reads, and translation of backend
//! failures into [`CatalogError`](catalog_core::catalog::CatalogError).

mod cancel;
mod catalog;
mod slug;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CachePolicy, CatalogOrchestrator};
pub use slug::DEFAULT_MAX_SLUG_ATTEMPTS;
