use super::error::EntryError;

/// Maximum length of an entry name, in bytes.
pub const MAX_NAME_LEN: usize = 200;

/// Largest price the stores can hold (a signed 64-bit integer column).
pub const MAX_PRICE: u64 = i64::MAX as u64;

/// Validates an entry name before creation or update.
pub fn validate_name(name: &str) -> Result<(), EntryError> {
    if name.trim().is_empty() {
        return Err(EntryError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(EntryError::NameTooLong);
    }
    Ok(())
}

/// Validates an entry price before creation or update.
pub fn validate_price(price: u64) -> Result<(), EntryError> {
    if price > MAX_PRICE {
        return Err(EntryError::PriceOutOfRange);
    }
    Ok(())
}
