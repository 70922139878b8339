//! Ed25519 key types.
//!
//! Thin, typed wrappers over `ed25519-dalek` that add:
//! - length-checked construction from raw bytes,
//! - PKCS#8 / SPKI export,
//! - identity semantics shared with the other key types.
//!
//! The private key holds the 32-byte RFC 8032 seed. The expanded scalar and
//! nonce prefix are derived by the primitive when needed and are never
//! exposed.

/// Key structs and their operations.
mod core;

pub use self::core::{ED25519_KEY_LENGTH, Ed25519PrivateKey, Ed25519PublicKey};
