//! ECDSA over secp256k1.
//!
//! - Private keys are scalars `1 <= d < n`.
//! - Public keys are stored in 33-byte SEC1 compressed form, whatever form
//!   they were imported from.
//! - Signatures are computed over the Keccak-256 digest of the message with
//!   RFC 6979 nonces.
//!
//! The curve arithmetic itself is delegated to
//! `k256`.

mod core;

pub use self::core::{
    ECDSA_COMPRESSED_POINT_LENGTH, ECDSA_SCALAR_LENGTH, ECDSA_UNCOMPRESSED_POINT_LENGTH,
    EcdsaPrivateKey, EcdsaPublicKey,
};
