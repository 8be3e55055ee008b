//! Redis cache backend implementation.
//!
//! Provides a shared cache for multi-instance deployments, using a
//! `ConnectionManager` that reconnects transparently.

mod cache;
mod error;

pub use cache::RedisCache;
