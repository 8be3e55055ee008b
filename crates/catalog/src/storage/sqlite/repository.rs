//! SQLite repository implementation.
//!
//! Implements `EntryRepository` from `catalog_core::storage` using SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::InterruptHandle;
use tokio_rusqlite::Connection;

use catalog_core::catalog::Entry;
use catalog_core::health::HealthCheck;
use catalog_core::storage::{EntryRepository, RepositoryError, Result};

use super::abort;
use super::conversions::{format_datetime, price_to_sql, row_to_entry};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based entry store.
///
/// All statements run on the connection's dedicated thread. Writes are
/// rolled back when the awaiting future is dropped before they commit.
pub struct SqliteRepository {
    conn: Connection,
    interrupt: Arc<InterruptHandle>,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::open(conn).await
    }

    /// Creates a repository backed by an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::open(conn).await
    }

    async fn open(conn: Connection) -> Result<Self> {
        Self::init_schema(&conn).await?;

        let interrupt = conn
            .call(|conn| Ok(conn.get_interrupt_handle()))
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            conn,
            interrupt: Arc::new(interrupt),
        })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl EntryRepository for SqliteRepository {
    async fn insert(&self, entry: &Entry) -> Result<Entry> {
        let name = entry.name.clone();
        let slug = entry.slug.clone();
        let price = price_to_sql(entry.price)?;
        let now = format_datetime(&Utc::now());
        let key = entry.slug.clone();

        let (ticket, guard) = abort::pair(&self.interrupt);
        let result = self
            .conn
            .call(move |conn| {
                ticket
                    .run(conn, |tx| {
                        let mut stmt = tx.prepare(schema::INSERT_ENTRY)?;
                        stmt.query_row(rusqlite::params![name, slug, price, now], row_to_entry)
                    })
                    .map_err(wrap_err)
            })
            .await;
        guard.disarm();

        result.map_err(|e| map_tokio_rusqlite_error(e, key))
    }

    async fn update(&self, entry: &Entry) -> Result<Entry> {
        let id = entry.id;
        let name = entry.name.clone();
        let price = price_to_sql(entry.price)?;
        let now = format_datetime(&Utc::now());

        let (ticket, guard) = abort::pair(&self.interrupt);
        let result = self
            .conn
            .call(move |conn| {
                ticket
                    .run(conn, |tx| {
                        let mut stmt = tx.prepare(schema::UPDATE_ENTRY)?;
                        stmt.query_row(rusqlite::params![id, name, price, now], row_to_entry)
                    })
                    .map_err(wrap_err)
            })
            .await;
        guard.disarm();

        result.map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<Entry> {
        let (ticket, guard) = abort::pair(&self.interrupt);
        let result = self
            .conn
            .call(move |conn| {
                ticket
                    .run(conn, |tx| {
                        let mut stmt = tx.prepare(schema::DELETE_ENTRY)?;
                        stmt.query_row([id], row_to_entry)
                    })
                    .map_err(wrap_err)
            })
            .await;
        guard.disarm();

        result.map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Entry>> {
        let slug = slug.to_string();
        let key = slug.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ENTRY_BY_SLUG)
                    .map_err(wrap_err)?;
                match stmt.query_row([&slug], row_to_entry) {
                    Ok(entry) => Ok(Some(entry)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, key))
    }
}

#[async_trait]
impl HealthCheck for SqliteRepository {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn ping(&self) -> std::result::Result<(), String> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| e.to_string())
    }
}
