//! Error taxonomy shared by every codec and key type in the crate.
//!
//! Each variant names one kind of caller-recoverable failure. Parsing is
//! deterministic, so nothing here is ever retried internally: the same input
//! always produces the same error.

use thiserror::Error;

use crate::format::{KeyAlgorithm, KeyFormat, KeyType, RawFormat};

/// Errors produced while decoding, constructing or exporting keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Malformed hex, base64 or PEM body.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// PEM framing (header, footer or line structure) does not match.
    #[error("invalid PEM: {0}")]
    InvalidPem(String),

    /// Malformed ASN.1 (truncated length, wrong tag, trailing data).
    #[error("invalid DER: {0}")]
    InvalidDer(String),

    /// The container names an algorithm OID this crate does not handle.
    #[error("unsupported algorithm OID {0}")]
    UnsupportedAlgorithm(String),

    /// EC domain parameters name a curve other than secp256k1.
    #[error("unsupported EC curve {0}, expected secp256k1 (1.3.132.0.10)")]
    CurveMismatch(String),

    /// Raw key material has the wrong length for its algorithm.
    #[error("invalid {algorithm} {key_type} key length: {actual} bytes")]
    InvalidKeyLength {
        algorithm: KeyAlgorithm,
        key_type: KeyType,
        actual: usize,
    },

    /// Off-curve point or malformed SEC1 prefix.
    #[error("invalid curve point: {0}")]
    InvalidPoint(String),

    /// ECDSA private scalar outside `1 <= d < n`.
    #[error("private scalar is zero or not below the secp256k1 group order")]
    InvalidScalar,

    /// Signatures are always 64 bytes.
    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// The container cannot carry this key type.
    #[error("format {format} cannot carry a {key_type} key")]
    FormatTypeMismatch { format: KeyFormat, key_type: KeyType },

    /// Bytes were supplied where a string was expected, or the reverse.
    #[error("format {format} expects a {expected} value, got {actual}")]
    RawFormatMismatch {
        format: KeyFormat,
        expected: RawFormat,
        actual: RawFormat,
    },

    /// The secure random source failed.
    #[error("entropy source failure: {0}")]
    Entropy(String),
}

/// Result alias used across the crate.
pub type Result<T, E = KeyError> = core::result::Result<T, E>;
