//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every mutating statement uses `RETURNING` so the
//! repository hands back the persisted row in a single round-trip.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps identifiers of deleted rows from being reused.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    price INTEGER NOT NULL CHECK (price >= 0),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries (name, slug, price, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?4)
RETURNING id, name, slug, price, created_at, updated_at
"#;

pub const UPDATE_ENTRY: &str = r#"
UPDATE entries
SET name = ?2, price = ?3, updated_at = ?4
WHERE id = ?1
RETURNING id, name, slug, price, created_at, updated_at
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM entries
WHERE id = ?1
RETURNING id, name, slug, price, created_at, updated_at
"#;

pub const SELECT_ENTRY_BY_SLUG: &str = r#"
SELECT id, name, slug, price, created_at, updated_at
FROM entries
WHERE slug = ?1
"#;

pub const PING: &str = "SELECT 1";
