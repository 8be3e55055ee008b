mod error;
mod http_mapping;
mod operations;
mod requests;
mod slug;
mod types;

pub use error::{CatalogError, EntryError};
pub use http_mapping::{catalog_error_to_status_code, entry_error_to_status_code};
pub use operations::{validate_name, validate_price, MAX_NAME_LEN, MAX_PRICE};
pub use requests::{CreateEntryRequest, UpdateEntryRequest};
pub use slug::{slug_candidate, slugify, FALLBACK_SLUG, SLUG_SEPARATOR};
pub use types::Entry;
