mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::entry_key;
pub use serialization::{deserialize_entry, serialize_entry, SerializationError};
pub use traits::Cache;
