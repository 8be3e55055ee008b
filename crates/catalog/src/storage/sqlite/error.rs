//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`.
//! Constraint violations on `slug` surface as `AlreadyExists` so a lost slug
//! race is distinguishable from an internal failure.

use catalog_core::storage::RepositoryError;

const ENTITY: &str = "Entry";

/// Maps a rusqlite error to a RepositoryError.
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `PRIMARYKEY` → `AlreadyExists`
/// - `QueryReturnedNoRows` → `NotFound`
/// - `CannotOpen` → `ConnectionFailed`
/// - anything else → `QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, key: &str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RepositoryError::AlreadyExists {
                entity_type: ENTITY,
                id: key.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type: ENTITY,
            id: key.to_string(),
        },

        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::Serialization(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// `key` identifies the row the statement targeted (an id or a slug) and is
/// carried into `NotFound`/`AlreadyExists`.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error, key: impl AsRef<str>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, key.as_ref())
        }
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn constraint_error(extended_code: i32) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_unique_constraint_maps_to_already_exists() {
        let result = map_tokio_rusqlite_error(
            constraint_error(ffi::SQLITE_CONSTRAINT_UNIQUE),
            "pear-watch",
        );

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Entry",
                id: "pear-watch".to_string(),
            }
        );
    }

    #[test]
    fn test_primary_key_constraint_maps_to_already_exists() {
        let result =
            map_tokio_rusqlite_error(constraint_error(ffi::SQLITE_CONSTRAINT_PRIMARYKEY), "7");

        assert!(matches!(result, RepositoryError::AlreadyExists { .. }));
    }

    #[test]
    fn test_check_constraint_maps_to_query_failed() {
        let result = map_tokio_rusqlite_error(constraint_error(ffi::SQLITE_CONSTRAINT_CHECK), "7");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_no_rows_maps_to_not_found_with_key() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err, "42");

        assert_eq!(
            result,
            RepositoryError::NotFound {
                entity_type: "Entry",
                id: "42".to_string(),
            }
        );
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "42");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
