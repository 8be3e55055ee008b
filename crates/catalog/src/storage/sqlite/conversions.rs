//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use catalog_core::catalog::Entry;
use catalog_core::storage::RepositoryError;
use chrono::{DateTime, Utc};
use rusqlite::Row;

/// Convert a SQLite row to an Entry.
///
/// Expected columns: id, name, slug, price, created_at, updated_at
pub fn row_to_entry(row: &Row) -> rusqlite::Result<Entry> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let slug: String = row.get(2)?;
    let price: i64 = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Entry {
        id,
        name,
        slug,
        price: parse_price(price)?,
        created_at: Some(parse_datetime(&created_at)?),
        updated_at: Some(parse_datetime(&updated_at)?),
    })
}

/// Convert a price to its SQLite column value.
pub fn price_to_sql(price: u64) -> Result<i64, RepositoryError> {
    i64::try_from(price)
        .map_err(|_| RepositoryError::InvalidData(format!("price {price} exceeds storage range")))
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_price(value: i64) -> rusqlite::Result<u64> {
    u64::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Integer, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_to_sql_in_range() {
        assert_eq!(price_to_sql(0).unwrap(), 0);
        assert_eq!(price_to_sql(250).unwrap(), 250);
    }

    #[test]
    fn test_price_to_sql_overflow() {
        let result = price_to_sql(u64::MAX);
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        assert!(parse_price(-1).is_err());
        assert_eq!(parse_price(42).unwrap(), 42);
    }

    #[test]
    fn test_format_and_parse_datetime() {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let formatted = format_datetime(&dt);

        assert!(formatted.starts_with("2024-06-15"));
        assert_eq!(parse_datetime(&formatted).unwrap(), dt);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-datetime").is_err());
    }
}
