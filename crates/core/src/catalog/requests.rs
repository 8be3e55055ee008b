//! API request types for catalog operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::types::Entry;

/// Request payload for creating a new entry.
///
/// The slug, identifier and timestamps are never taken from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub name: String,
    pub price: u64,
}

impl CreateEntryRequest {
    /// Converts the request into an unsaved entry.
    pub fn into_entry(self) -> Entry {
        Entry::new(self.name, self.price)
    }
}

/// Request payload for updating an existing entry.
///
/// Only `name` and `price` are mutable; the slug is preserved by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    pub name: String,
    pub price: u64,
}

impl UpdateEntryRequest {
    /// Converts the request into an entry targeting `id`.
    pub fn into_entry(self, id: i64) -> Entry {
        Entry::new(self.name, self.price).with_id(id)
    }
}
