//! Message hashing used by the ECDSA key types.
//!
//! ECDSA messages are pre-hashed with **Keccak-256**, the original Keccak
//! submission with `0x01` domain padding, not the standardised SHA3-256.
//! The two produce different digests for every input.
//!
//! Ed25519 never pre-hashes here: its SHA-512 schedule lives inside the
//! signature primitive (RFC 8032).

use sha3::{Digest, Keccak256};

/// Output length of Keccak-256 in bytes.
pub const KECCAK256_LEN: usize = 32;

/// Computes the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; KECCAK256_LEN] {
    Keccak256::digest(data).into()
}

/// Returns a Keccak-256 state already fed with `message`.
///
/// The digest-based verifier finalises this state itself.
pub(crate) fn keccak256_state(message: &[u8]) -> Keccak256 {
    Keccak256::new_with_prefix(message)
}
