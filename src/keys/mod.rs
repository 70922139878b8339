//! Asymmetric key types.
//!
//! Four concrete key types cover the {private, public} × {Ed25519, ECDSA}
//! matrix:
//!
//! | Type                  | Raw material                              |
//! |-----------------------|-------------------------------------------|
//! | [`Ed25519PrivateKey`] | 32-byte seed                              |
//! | [`Ed25519PublicKey`]  | 32-byte encoded Edwards point             |
//! | [`EcdsaPrivateKey`]   | 32-byte big-endian scalar, `1 <= d < n`   |
//! | [`EcdsaPublicKey`]    | 33-byte SEC1 compressed secp256k1 point   |
//!
//! Raw material is length-checked at construction and never mutated
//! afterwards; every transform returns a new value.
//!
//! ## Ed25519
//!
//! RFC 8032 signatures via `ed25519-dalek`. Messages are signed as-is.
//!
//! ## ECDSA
//!
//! ECDSA over secp256k1 via `k256`. Messages are hashed with Keccak-256
//! before signing, and nonces are derived deterministically (RFC 6979,
//! HMAC-SHA256). Signatures are the 64-byte `r || s` concatenation, with no
//! DER wrapping or recovery byte.
//!
//! The [`Key`] trait is the common surface every key type shares: identity
//! (type, algorithm, raw bytes) and container export.

pub mod ecdsa;
pub mod ed25519;

pub use ecdsa::{EcdsaPrivateKey, EcdsaPublicKey};
pub use ed25519::{Ed25519PrivateKey, Ed25519PublicKey};

use crate::error::Result;
use crate::factory;
use crate::format::{KeyAlgorithm, KeyFormat, KeyType};

/// Length of a signature produced by either algorithm.
pub const SIGNATURE_LENGTH: usize = 64;

/// Behaviour shared by every key type.
pub trait Key {
    fn key_type(&self) -> KeyType;

    fn algorithm(&self) -> KeyAlgorithm;

    /// Returns a fresh copy of the raw key material.
    fn to_raw_bytes(&self) -> Vec<u8>;

    /// Encodes the key in the DER container matching its type: PKCS#8 for
    /// private keys, SPKI for public keys.
    fn to_der(&self) -> Result<Vec<u8>>;

    /// Exports the key into a byte-valued format.
    ///
    /// # Errors
    ///
    /// - `FormatTypeMismatch` if `format` cannot carry this key type.
    /// - `RawFormatMismatch` if `format` is a PEM (string) format.
    fn to_bytes(&self, format: KeyFormat) -> Result<Vec<u8>> {
        factory::export_bytes(self, format)
    }

    /// Exports the key into a string-valued format.
    ///
    /// # Errors
    ///
    /// - `FormatTypeMismatch` if `format` cannot carry this key type.
    /// - `RawFormatMismatch` if `format` is a DER (bytes) format.
    fn to_text(&self, format: KeyFormat) -> Result<String> {
        factory::export_text(self, format)
    }
}
