//! In-memory storage backend.
//!
//! Stores entries in a `HashMap` wrapped in `Arc<RwLock<_>>`. Useful for tests
//! and local development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
