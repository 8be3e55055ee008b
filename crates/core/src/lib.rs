//! Functional core for the catalog service.
//!
//! Pure data types, validation, slug normalization, error taxonomies and the
//! collaborator traits (`EntryRepository`, `Cache`, `HealthCheck`). Nothing in
//! this crate performs I/O; concrete backends live in the `catalog` crate.

pub mod cache;
pub mod catalog;
pub mod health;
pub mod storage;
