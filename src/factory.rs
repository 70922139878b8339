//! Key factory and format matrix dispatch.
//!
//! [`PrivateKey`] and [`PublicKey`] are algorithm-erased handles over the
//! concrete key types. All imports and exports across the format matrix go
//! through them:
//!
//! | Format    | Key type | Raw form | Import path                          |
//! |-----------|----------|----------|--------------------------------------|
//! | PKCS8+DER | private  | bytes    | PrivateKeyInfo → branch on OID       |
//! | PKCS8+PEM | private  | string   | PEM "PRIVATE KEY" → PKCS8+DER path   |
//! | SPKI+DER  | public   | bytes    | SubjectPublicKeyInfo → branch on OID |
//! | SPKI+PEM  | public   | string   | PEM "PUBLIC KEY" → SPKI+DER path     |
//!
//! Descriptor checks run before any parsing: a format that cannot carry the
//! key type fails with `FormatTypeMismatch`, and a value of the wrong raw
//! form (bytes vs string) fails with `RawFormatMismatch`.

use core::str::FromStr;

use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroizing;

use crate::der::{PrivateKeyMaterial, PublicKeyMaterial, pkcs8, spki};
use crate::encoding::pem;
use crate::error::{KeyError, Result};
use crate::format::{ByteImportEncoding, KeyAlgorithm, KeyEncoding, KeyFormat, KeyType, RawFormat};
use crate::keys::{
    EcdsaPrivateKey, EcdsaPublicKey, Ed25519PrivateKey, Ed25519PublicKey, Key, SIGNATURE_LENGTH,
};

/// An encoded key as supplied by a caller: binary or textual.
#[derive(Clone, Copy, Debug)]
pub enum KeyValue<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl KeyValue<'_> {
    pub fn raw_format(&self) -> RawFormat {
        match self {
            KeyValue::Bytes(_) => RawFormat::Bytes,
            KeyValue::Text(_) => RawFormat::String,
        }
    }
}

impl<'a> From<&'a [u8]> for KeyValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        KeyValue::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for KeyValue<'a> {
    fn from(text: &'a str) -> Self {
        KeyValue::Text(text)
    }
}

/// Validates the descriptor and turns `value` into container DER.
fn container_der(
    format: KeyFormat,
    key_type: KeyType,
    value: KeyValue<'_>,
) -> Result<Zeroizing<Vec<u8>>> {
    if !format.supports_type(key_type) {
        return Err(KeyError::FormatTypeMismatch { format, key_type });
    }

    tracing::debug!(%format, %key_type, "importing key container");

    match (format.encoding(), value) {
        (KeyEncoding::Der, KeyValue::Bytes(der)) => Ok(Zeroizing::new(der.to_vec())),
        (KeyEncoding::Pem, KeyValue::Text(text)) => {
            Ok(Zeroizing::new(pem::from_pem(key_type, text)?))
        }
        (_, value) => Err(KeyError::RawFormatMismatch {
            format,
            expected: format.raw_format(),
            actual: value.raw_format(),
        }),
    }
}

fn check_export(key_type: KeyType, format: KeyFormat, requested: RawFormat) -> Result<()> {
    if !format.supports_type(key_type) {
        return Err(KeyError::FormatTypeMismatch { format, key_type });
    }
    if format.raw_format() != requested {
        return Err(KeyError::RawFormatMismatch {
            format,
            expected: format.raw_format(),
            actual: requested,
        });
    }
    Ok(())
}

/// Byte export shared by every [`Key`]: only DER formats produce bytes.
pub(crate) fn export_bytes<K: Key + ?Sized>(key: &K, format: KeyFormat) -> Result<Vec<u8>> {
    check_export(key.key_type(), format, RawFormat::Bytes)?;
    key.to_der()
}

/// String export shared by every [`Key`]: only PEM formats produce text.
pub(crate) fn export_text<K: Key + ?Sized>(key: &K, format: KeyFormat) -> Result<String> {
    check_export(key.key_type(), format, RawFormat::String)?;

    let der = Zeroizing::new(key.to_der()?);
    Ok(pem::to_pem(key.key_type().pem_label(), &der))
}

/// A private key of either algorithm.
#[derive(Clone, Debug)]
pub enum PrivateKey {
    Ed25519(Ed25519PrivateKey),
    Ecdsa(EcdsaPrivateKey),
}

impl PrivateKey {
    /// Generates a fresh key from the operating system's random source.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate(algorithm: KeyAlgorithm) -> Result<Self> {
        Self::generate_with(algorithm, &mut OsRng)
    }

    /// Generates a fresh key from the given generator.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(
        algorithm: KeyAlgorithm,
        rng: &mut R,
    ) -> Result<Self> {
        tracing::debug!(%algorithm, "generating private key");

        Ok(match algorithm {
            KeyAlgorithm::Ed25519 => Self::Ed25519(Ed25519PrivateKey::generate_with(rng)?),
            KeyAlgorithm::Ecdsa => Self::Ecdsa(EcdsaPrivateKey::generate_with(rng)?),
        })
    }

    /// Imports raw key material, bypassing containers.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength` unless `raw` is 32 bytes.
    /// - `InvalidScalar` for an out-of-range ECDSA scalar.
    pub fn from_raw(algorithm: KeyAlgorithm, raw: &[u8]) -> Result<Self> {
        Ok(match algorithm {
            KeyAlgorithm::Ed25519 => Self::Ed25519(Ed25519PrivateKey::from_raw(raw)?),
            KeyAlgorithm::Ecdsa => Self::Ecdsa(EcdsaPrivateKey::from_raw(raw)?),
        })
    }

    /// Decodes hex or base64 text, then imports it as raw material.
    ///
    /// # Errors
    ///
    /// `InvalidEncoding` for malformed text, then as [`PrivateKey::from_raw`].
    pub fn from_encoded(
        algorithm: KeyAlgorithm,
        encoding: ByteImportEncoding,
        value: &str,
    ) -> Result<Self> {
        let raw = Zeroizing::new(encoding.decode(value)?);
        Self::from_raw(algorithm, &raw)
    }

    /// Imports a key from a container in `format`.
    ///
    /// # Errors
    ///
    /// - `FormatTypeMismatch` unless `format` is a PKCS#8 format.
    /// - `RawFormatMismatch` if the value is bytes for PEM or text for DER.
    /// - Any codec or container error raised while decoding.
    pub fn create<'a>(format: KeyFormat, value: impl Into<KeyValue<'a>>) -> Result<Self> {
        let der = container_der(format, KeyType::Private, value.into())?;
        Self::from_pkcs8_der(&der)
    }

    pub fn from_bytes(format: KeyFormat, value: &[u8]) -> Result<Self> {
        Self::create(format, KeyValue::Bytes(value))
    }

    pub fn from_text(format: KeyFormat, value: &str) -> Result<Self> {
        Self::create(format, KeyValue::Text(value))
    }

    /// Parses PKCS#8 DER and builds the key the algorithm OID names.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        let key = match pkcs8::decode(der)? {
            PrivateKeyMaterial::Ed25519(seed) => {
                Self::Ed25519(Ed25519PrivateKey::from_seed(&seed))
            }
            PrivateKeyMaterial::Secp256k1(scalar) => {
                Self::Ecdsa(EcdsaPrivateKey::from_raw(&scalar[..])?)
            }
        };

        tracing::debug!(algorithm = %key.algorithm(), "imported private key");
        Ok(key)
    }

    /// Signs `message` with the algorithm of this key.
    ///
    /// Ed25519 signs the message directly. ECDSA signs its Keccak-256
    /// digest.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        match self {
            Self::Ed25519(key) => key.sign(message),
            Self::Ecdsa(key) => key.sign(message),
        }
    }

    pub fn create_public_key(&self) -> PublicKey {
        match self {
            Self::Ed25519(key) => PublicKey::Ed25519(key.create_public_key()),
            Self::Ecdsa(key) => PublicKey::Ecdsa(key.create_public_key()),
        }
    }
}

impl Key for PrivateKey {
    fn key_type(&self) -> KeyType {
        KeyType::Private
    }

    fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Ed25519(_) => KeyAlgorithm::Ed25519,
            Self::Ecdsa(_) => KeyAlgorithm::Ecdsa,
        }
    }

    fn to_raw_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => key.to_raw_bytes(),
            Self::Ecdsa(key) => key.to_raw_bytes(),
        }
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        match self {
            Self::Ed25519(key) => key.to_der(),
            Self::Ecdsa(key) => key.to_der(),
        }
    }
}

impl From<Ed25519PrivateKey> for PrivateKey {
    fn from(key: Ed25519PrivateKey) -> Self {
        Self::Ed25519(key)
    }
}

impl From<EcdsaPrivateKey> for PrivateKey {
    fn from(key: EcdsaPrivateKey) -> Self {
        Self::Ecdsa(key)
    }
}

/// Parses a PKCS#8 PEM block.
impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(KeyFormat::Pkcs8Pem, s)
    }
}

/// A public key of either algorithm.
#[derive(Clone, Debug)]
pub enum PublicKey {
    Ed25519(Ed25519PublicKey),
    Ecdsa(EcdsaPublicKey),
}

impl PublicKey {
    /// Imports a raw point, bypassing containers.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength`: Ed25519 takes 32 bytes, ECDSA 33 or 65.
    /// - `InvalidPoint` for a malformed ECDSA point.
    pub fn from_raw(algorithm: KeyAlgorithm, raw: &[u8]) -> Result<Self> {
        Ok(match algorithm {
            KeyAlgorithm::Ed25519 => Self::Ed25519(Ed25519PublicKey::from_raw(raw)?),
            KeyAlgorithm::Ecdsa => Self::Ecdsa(EcdsaPublicKey::from_raw(raw)?),
        })
    }

    /// Decodes hex or base64 text, then imports it as a raw point.
    pub fn from_encoded(
        algorithm: KeyAlgorithm,
        encoding: ByteImportEncoding,
        value: &str,
    ) -> Result<Self> {
        Self::from_raw(algorithm, &encoding.decode(value)?)
    }

    /// Imports a key from a container in `format`.
    ///
    /// # Errors
    ///
    /// - `FormatTypeMismatch` unless `format` is an SPKI format.
    /// - `RawFormatMismatch` if the value is bytes for PEM or text for DER.
    /// - Any codec or container error raised while decoding.
    pub fn create<'a>(format: KeyFormat, value: impl Into<KeyValue<'a>>) -> Result<Self> {
        let der = container_der(format, KeyType::Public, value.into())?;
        Self::from_spki_der(&der)
    }

    pub fn from_bytes(format: KeyFormat, value: &[u8]) -> Result<Self> {
        Self::create(format, KeyValue::Bytes(value))
    }

    pub fn from_text(format: KeyFormat, value: &str) -> Result<Self> {
        Self::create(format, KeyValue::Text(value))
    }

    /// Parses SPKI DER and builds the key the algorithm OID names.
    pub fn from_spki_der(der: &[u8]) -> Result<Self> {
        let key = match spki::decode(der)? {
            PublicKeyMaterial::Ed25519(point) => Self::Ed25519(Ed25519PublicKey::from_raw(&point)?),
            PublicKeyMaterial::Secp256k1(point) => Self::Ecdsa(EcdsaPublicKey::from_raw(&point)?),
        };

        tracing::debug!(algorithm = %key.algorithm(), "imported public key");
        Ok(key)
    }

    /// Verifies a 64-byte signature over `message`.
    ///
    /// A signature that does not verify yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// `InvalidSignatureLength` if `signature` is not 64 bytes.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        match self {
            Self::Ed25519(key) => key.verify(message, signature),
            Self::Ecdsa(key) => key.verify(message, signature),
        }
    }
}

impl Key for PublicKey {
    fn key_type(&self) -> KeyType {
        KeyType::Public
    }

    fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Ed25519(_) => KeyAlgorithm::Ed25519,
            Self::Ecdsa(_) => KeyAlgorithm::Ecdsa,
        }
    }

    fn to_raw_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => key.to_raw_bytes(),
            Self::Ecdsa(key) => key.to_raw_bytes(),
        }
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        match self {
            Self::Ed25519(key) => key.to_der(),
            Self::Ecdsa(key) => key.to_der(),
        }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        Self::Ed25519(key)
    }
}

impl From<EcdsaPublicKey> for PublicKey {
    fn from(key: EcdsaPublicKey) -> Self {
        Self::Ecdsa(key)
    }
}

/// Parses an SPKI PEM block.
impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(KeyFormat::SpkiPem, s)
    }
}
