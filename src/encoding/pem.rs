//! PEM framing for DER containers.
//!
//! Encoding is byte-exact: a `BEGIN` line, base64 body lines of
//! [`PEM_LINE_WIDTH`] characters, an `END` line, each terminated by `\n`.
//!
//! Decoding accepts the variations found in real-world blobs:
//! - CRLF, CR or LF line endings,
//! - leading/trailing whitespace and blank lines,
//! - stray characters outside the base64 alphabet inside the body,
//! - missing `=` padding.
//!
//! Framing must still match the expected label exactly, and a body whose
//! length cannot be padded into valid base64 is rejected rather than
//! truncated.

use crate::encoding::base64;
use crate::error::{KeyError, Result};
use crate::format::KeyType;

/// Base64 characters per PEM body line.
pub const PEM_LINE_WIDTH: usize = 64;

/// Wraps `der` in PEM framing with the given label.
pub fn to_pem(label: &str, der: &[u8]) -> String {
    let body = base64::encode(der);
    let lines = body.len().div_ceil(PEM_LINE_WIDTH);
    let mut out = String::with_capacity(body.len() + lines + 2 * (label.len() + 17));

    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");

    // base64 output is ASCII, so byte offsets are char boundaries
    let mut start = 0;
    while start < body.len() {
        let end = (start + PEM_LINE_WIDTH).min(body.len());
        out.push_str(&body[start..end]);
        out.push('\n');
        start = end;
    }

    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Extracts the DER payload of a PEM blob labelled for `key_type`.
///
/// # Errors
///
/// - `InvalidPem` if no non-blank line remains, or if the first or last line
///   is not the `BEGIN`/`END` marker for `key_type`'s label.
/// - `InvalidEncoding` if the cleaned body length is `1 (mod 4)`, or the
///   repaired body is not valid base64.
pub fn from_pem(key_type: KeyType, pem: &str) -> Result<Vec<u8>> {
    let label = key_type.pem_label();
    let header = format!("-----BEGIN {label}-----");
    let footer = format!("-----END {label}-----");

    let normalized = pem.replace('\r', "\n");
    let lines: Vec<&str> = normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return Err(KeyError::InvalidPem("no content".into()));
    };
    if *first != header {
        return Err(KeyError::InvalidPem(format!("expected `{header}` header")));
    }
    if lines.len() < 2 || *last != footer {
        return Err(KeyError::InvalidPem(format!("expected `{footer}` footer")));
    }

    let mut payload: String = lines[1..lines.len() - 1]
        .iter()
        .flat_map(|line| line.chars())
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    let missing = match payload.len() % 4 {
        1 => {
            return Err(KeyError::InvalidEncoding(format!(
                "PEM body length {} cannot be padded to base64",
                payload.len()
            )));
        }
        remainder => (4 - remainder) % 4,
    };
    if missing > 0 {
        tracing::debug!(label, missing, "repairing PEM base64 padding");
        payload.extend(core::iter::repeat_n('=', missing));
    }

    base64::decode(&payload)
}
