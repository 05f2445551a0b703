use soroban_sdk::Bytes;

use crate::{errors::EventError, MAX_FIELD_LENGTH};

pub fn validate_field(field: &Bytes) -> Result<(), EventError> {
    if field.is_empty() {
        return Err(EventError::EmptyField);
    }
    if field.len() > MAX_FIELD_LENGTH {
        return Err(EventError::FieldTooLong);
    }
    Ok(())
}

pub fn validate_price(price: u64) -> Result<(), EventError> {
    if price == 0 {
        return Err(EventError::InvalidPrice);
    }
    Ok(())
}

/// Decode a big-endian unsigned integer of at most eight bytes.
///
/// An empty slice decodes to zero.
pub fn parse_uint(raw: &Bytes) -> Result<u64, EventError> {
    if raw.len() > 8 {
        return Err(EventError::InvalidNumber);
    }
    let mut value: u64 = 0;
    for byte in raw.iter() {
        value = (value << 8) | u64::from(byte);
    }
    Ok(value)
}
