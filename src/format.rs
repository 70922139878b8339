//! Key descriptors and the container/encoding format matrix.
//!
//! A [`KeyFormat`] is a `(KeyContainer, KeyEncoding)` pair. There are exactly
//! four of them, and each one fixes:
//! - which key type it can carry (PKCS#8 for private keys, SPKI for public),
//! - the raw transport of an encoded value ([`RawFormat::Bytes`] for DER,
//!   [`RawFormat::String`] for PEM).
//!
//! [`ByteImportEncoding`] covers the other textual surface: raw key material
//! written as hex or base64, without any container around it.

use core::fmt;

use crate::encoding::{base64, hex, pem};
use crate::error::Result;

/// Whether a key is the secret or the public half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    Public,
    Private,
}

impl KeyType {
    /// PEM label used in `-----BEGIN <label>-----` framing.
    pub const fn pem_label(self) -> &'static str {
        match self {
            KeyType::Public => "PUBLIC KEY",
            KeyType::Private => "PRIVATE KEY",
        }
    }

    /// The only container able to carry this key type.
    pub const fn container(self) -> KeyContainer {
        match self {
            KeyType::Public => KeyContainer::Spki,
            KeyType::Private => KeyContainer::Pkcs8,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyType::Public => "public",
            KeyType::Private => "private",
        })
    }
}

/// Signature algorithm a key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Ed25519,
    /// ECDSA over secp256k1 with Keccak-256 message hashing.
    Ecdsa,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyAlgorithm::Ed25519 => "Ed25519",
            KeyAlgorithm::Ecdsa => "ECDSA",
        })
    }
}

/// ASN.1 container structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContainer {
    /// PKCS#8 `PrivateKeyInfo`.
    Pkcs8,
    /// X.509 `SubjectPublicKeyInfo`.
    Spki,
}

impl KeyContainer {
    /// Returns `true` if this container can carry keys of `key_type`.
    pub const fn supports_type(self, key_type: KeyType) -> bool {
        matches!(
            (self, key_type),
            (KeyContainer::Pkcs8, KeyType::Private) | (KeyContainer::Spki, KeyType::Public)
        )
    }
}

/// Serialisation of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEncoding {
    Der,
    Pem,
}

impl KeyEncoding {
    pub const fn raw_format(self) -> RawFormat {
        match self {
            KeyEncoding::Der => RawFormat::Bytes,
            KeyEncoding::Pem => RawFormat::String,
        }
    }

    /// Turns a textual container into DER bytes.
    ///
    /// For [`KeyEncoding::Pem`] this is the PEM codec with the label of
    /// `key_type`. For [`KeyEncoding::Der`] the text is a hex dump of the DER
    /// bytes. It may start with `0x` and contain spaces or line breaks.
    ///
    /// # Errors
    ///
    /// - `InvalidEncoding` for a malformed hex or base64 body.
    /// - `InvalidPem` for broken PEM framing.
    pub fn decode_text(self, key_type: KeyType, value: &str) -> Result<Vec<u8>> {
        match self {
            KeyEncoding::Der => hex::decode(hex::strip_prefix(value.trim())),
            KeyEncoding::Pem => pem::from_pem(key_type, value),
        }
    }
}

/// How an encoded value travels: as bytes or as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawFormat {
    Bytes,
    String,
}

impl fmt::Display for RawFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RawFormat::Bytes => "bytes",
            RawFormat::String => "string",
        })
    }
}

/// One of the four supported container/encoding combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    Pkcs8Der,
    SpkiDer,
    Pkcs8Pem,
    SpkiPem,
}

impl KeyFormat {
    /// Every supported format.
    pub const ALL: [KeyFormat; 4] = [
        KeyFormat::Pkcs8Der,
        KeyFormat::SpkiDer,
        KeyFormat::Pkcs8Pem,
        KeyFormat::SpkiPem,
    ];

    pub const fn new(container: KeyContainer, encoding: KeyEncoding) -> Self {
        match (container, encoding) {
            (KeyContainer::Pkcs8, KeyEncoding::Der) => KeyFormat::Pkcs8Der,
            (KeyContainer::Spki, KeyEncoding::Der) => KeyFormat::SpkiDer,
            (KeyContainer::Pkcs8, KeyEncoding::Pem) => KeyFormat::Pkcs8Pem,
            (KeyContainer::Spki, KeyEncoding::Pem) => KeyFormat::SpkiPem,
        }
    }

    /// The format carrying `key_type` in the given encoding.
    pub const fn for_type(key_type: KeyType, encoding: KeyEncoding) -> Self {
        Self::new(key_type.container(), encoding)
    }

    pub const fn container(self) -> KeyContainer {
        match self {
            KeyFormat::Pkcs8Der | KeyFormat::Pkcs8Pem => KeyContainer::Pkcs8,
            KeyFormat::SpkiDer | KeyFormat::SpkiPem => KeyContainer::Spki,
        }
    }

    pub const fn encoding(self) -> KeyEncoding {
        match self {
            KeyFormat::Pkcs8Der | KeyFormat::SpkiDer => KeyEncoding::Der,
            KeyFormat::Pkcs8Pem | KeyFormat::SpkiPem => KeyEncoding::Pem,
        }
    }

    pub const fn raw_format(self) -> RawFormat {
        self.encoding().raw_format()
    }

    pub const fn supports_type(self, key_type: KeyType) -> bool {
        self.container().supports_type(key_type)
    }

    /// See [`KeyEncoding::decode_text`].
    pub fn decode_text(self, key_type: KeyType, value: &str) -> Result<Vec<u8>> {
        self.encoding().decode_text(key_type, value)
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyFormat::Pkcs8Der => "PKCS#8/DER",
            KeyFormat::SpkiDer => "SPKI/DER",
            KeyFormat::Pkcs8Pem => "PKCS#8/PEM",
            KeyFormat::SpkiPem => "SPKI/PEM",
        })
    }
}

/// Text encodings for raw key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteImportEncoding {
    /// Hex digits, optionally prefixed with `0x`.
    Hex,
    /// Standard RFC 4648 base64 with padding.
    Base64,
}

impl ByteImportEncoding {
    /// Decodes `value` into raw bytes.
    ///
    /// # Errors
    ///
    /// `InvalidEncoding` if the text is not valid in this encoding.
    pub fn decode(self, value: &str) -> Result<Vec<u8>> {
        let value = value.trim();
        match self {
            ByteImportEncoding::Hex => hex::decode(hex::strip_prefix(value)),
            ByteImportEncoding::Base64 => base64::decode(value),
        }
    }

    /// Encodes raw bytes. Hex output is lowercase without a prefix.
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            ByteImportEncoding::Hex => hex::encode(bytes),
            ByteImportEncoding::Base64 => base64::encode(bytes),
        }
    }
}
