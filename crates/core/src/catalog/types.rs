use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// `id` and the timestamps are owned by the durable store: they stay unset
/// (`0` / `None`) until the entry has been inserted. `slug` is assigned once at
/// creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Creates an entry that has not been stored yet.
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            slug: String::new(),
            price,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets a specific ID for this entry (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the slug for this entry.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the update timestamp.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_entry_is_not_persisted() {
        let entry = Entry::new("Pear Watch", 100);

        assert_eq!(entry.id, 0);
        assert!(entry.slug.is_empty());
        assert!(entry.created_at.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let entry = Entry::new("Pear Watch", 100)
            .with_id(7)
            .with_slug("pear-watch")
            .with_created_at(ts)
            .with_updated_at(ts);

        assert_eq!(entry.id, 7);
        assert_eq!(entry.slug, "pear-watch");
        assert_eq!(entry.created_at, Some(ts));
        assert_eq!(entry.updated_at, Some(ts));
    }

    #[test]
    fn test_deserialize_without_store_fields() {
        let entry: Entry = serde_json::from_str(r#"{"name":"Pear Watch","price":250}"#).unwrap();

        assert_eq!(entry, Entry::new("Pear Watch", 250));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = serde_json::from_str::<Entry>(r#"{"name":"Pear Watch","price":-1}"#);

        assert!(result.is_err());
    }
}
