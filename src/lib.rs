//! Key containers and codecs for Ed25519 and secp256k1 ECDSA.
//!
//! This crate represents asymmetric signing keys and converts them
//! losslessly between raw key material and the standard interchange
//! formats: PKCS#8 for private keys, SubjectPublicKeyInfo for public keys,
//! each as binary DER or textual PEM.
//!
//! The elliptic-curve arithmetic itself is delegated to `ed25519-dalek` and
//! `k256`. What lives here is the key model, the format codecs and the
//! dispatch between them.
//!
//! # Module overview
//!
//! - `encoding`
//!   Hex, base64 and PEM codecs. The PEM decoder tolerates line-ending
//!   variations, blank lines, stray characters and missing padding.
//!
//! - `der`
//!   Byte-exact PKCS#8 and SPKI encoding, and OID-dispatched decoding, built
//!   on derive-based ASN.1 structures.
//!
//! - `keys`
//!   The four concrete key types and the [`Key`] trait they share. Ed25519
//!   signs messages directly. ECDSA signs the Keccak-256 digest with RFC
//!   6979 nonces. Both produce 64-byte signatures.
//!
//! - `format`
//!   Descriptors for key type, algorithm, container and encoding, plus the
//!   four-entry [`KeyFormat`] matrix and [`ByteImportEncoding`].
//!
//! - `factory`
//!   [`PrivateKey`] and [`PublicKey`]: the single entry point for
//!   generation, import and export across every supported combination.
//!
//! - `identity`
//!   Equality and hashing over `(type, algorithm, raw bytes)`, shared by
//!   every key type.
//!
//! - `rng`
//!   Explicit random number generator handles for key generation.
//!
//! # Example
//!
//! ```
//! use keycodec::{Key, KeyAlgorithm, KeyFormat, PrivateKey};
//!
//! let key = PrivateKey::generate(KeyAlgorithm::Ed25519)?;
//! let pem = key.to_text(KeyFormat::Pkcs8Pem)?;
//!
//! let restored: PrivateKey = pem.parse()?;
//! assert_eq!(key, restored);
//!
//! let signature = key.sign(b"payload");
//! assert!(key.create_public_key().verify(b"payload", &signature)?);
//! # Ok::<(), keycodec::KeyError>(())
//! ```
//!
//! # Design goals
//!
//! - Byte-exact, OpenSSL-compatible container output
//! - Tolerant but deterministic parsing
//! - Typed errors, no panics on malformed input
//! - No key material in logs or `Debug` output

pub mod der;
pub mod encoding;
pub mod error;
pub mod factory;
pub mod format;
pub mod hash;
pub mod identity;
pub mod keypair;
pub mod keys;
pub mod rng;

pub use error::{KeyError, Result};
pub use factory::{KeyValue, PrivateKey, PublicKey};
pub use format::{
    ByteImportEncoding, KeyAlgorithm, KeyContainer, KeyEncoding, KeyFormat, KeyType, RawFormat,
};
pub use keypair::KeyPair;
pub use keys::{
    EcdsaPrivateKey, EcdsaPublicKey, Ed25519PrivateKey, Ed25519PublicKey, Key, SIGNATURE_LENGTH,
};
