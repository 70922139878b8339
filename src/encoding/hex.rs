//! Hex codec.

use crate::error::{KeyError, Result};

/// Encodes bytes as lowercase hex, two digits per byte, no separators.
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decodes a hex string.
///
/// Spaces, carriage returns and line feeds are removed before decoding, so
/// wrapped dumps decode as-is. A `0x` prefix is *not* handled here; see
/// [`strip_prefix`].
///
/// # Errors
///
/// `InvalidEncoding` if the remaining digit count is odd, or if a character
/// is not a hex digit. The message gives the position within the cleaned
/// input.
pub fn decode(value: &str) -> Result<Vec<u8>> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '\r' | '\n'))
        .collect();

    ::hex::decode(&cleaned).map_err(|err| match err {
        ::hex::FromHexError::OddLength => {
            KeyError::InvalidEncoding(format!("odd hex length {}", cleaned.len()))
        }
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            KeyError::InvalidEncoding(format!("invalid hex character {c:?} at position {index}"))
        }
        other => KeyError::InvalidEncoding(other.to_string()),
    })
}

/// Removes a leading `0x` or `0X`, if present.
pub fn strip_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
