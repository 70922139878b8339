//! Text codecs for key material.
//!
//! - `hex`: lowercase hex encoding; decoding tolerates spaces and line
//!   breaks.
//! - `base64`: standard RFC 4648 alphabet with padding.
//! - `pem`: `-----BEGIN/END <LABEL>-----` framing around base64 DER. The
//!   decoder is tolerant of line-ending style, blank lines, stray
//!   characters and missing padding, but deterministic in what it rejects.
//!
//! Every decoder reports failures as [`KeyError`](crate::KeyError) values.
//! None of them panics on malformed input.

pub mod base64;
pub mod hex;
pub mod pem;
