//! Pure functions for mapping catalog errors to HTTP status codes.
//!
//! Following the Functional Core pattern - pure functions with no side effects.

use super::{CatalogError, EntryError};

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Conflict` -> 409 (Conflict)
/// - `Internal` -> 500 (Internal Server Error)
/// - `Cancelled` -> 408 (Request Timeout)
///
/// # Examples
///
/// ```
/// use catalog_core::catalog::{catalog_error_to_status_code, CatalogError};
///
/// assert_eq!(catalog_error_to_status_code(&CatalogError::NotFound), 404);
/// ```
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::NotFound => 404,
        CatalogError::Conflict => 409,
        CatalogError::Internal => 500,
        CatalogError::Cancelled => 408,
    }
}

/// Maps an [`EntryError`] to an HTTP status code.
///
/// Validation failures are always the client's fault.
pub fn entry_error_to_status_code(_error: &EntryError) -> u16 {
    400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(catalog_error_to_status_code(&CatalogError::NotFound), 404);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        assert_eq!(catalog_error_to_status_code(&CatalogError::Conflict), 409);
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(catalog_error_to_status_code(&CatalogError::Internal), 500);
    }

    #[test]
    fn test_cancelled_maps_to_408() {
        assert_eq!(catalog_error_to_status_code(&CatalogError::Cancelled), 408);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        assert_eq!(entry_error_to_status_code(&EntryError::EmptyName), 400);
        assert_eq!(entry_error_to_status_code(&EntryError::NameTooLong), 400);
        assert_eq!(entry_error_to_status_code(&EntryError::PriceOutOfRange), 400);
    }
}
