//! Base64 codec over the standard padded alphabet.

use ::base64::Engine;
use ::base64::engine::general_purpose::STANDARD;

use crate::error::{KeyError, Result};

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// # Errors
///
/// `InvalidEncoding` on characters outside the alphabet or bad padding.
pub fn decode(value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|err| KeyError::InvalidEncoding(format!("base64: {err}")))
}
