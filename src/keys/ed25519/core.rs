//! Core Ed25519 private and public key types.

use core::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroizing;

use crate::der::{pkcs8, spki};
use crate::encoding::hex::encode;
use crate::error::{KeyError, Result};
use crate::format::{KeyAlgorithm, KeyType};
use crate::keys::{Key, SIGNATURE_LENGTH};

/// Length of both the seed and the encoded public point.
pub const ED25519_KEY_LENGTH: usize = 32;

/// An Ed25519 private key.
///
/// Wraps the 32-byte seed. The underlying signing key zeroizes its secret
/// material on drop.
#[derive(Clone)]
pub struct Ed25519PrivateKey {
    signing_key: SigningKey,
}

impl Ed25519PrivateKey {
    /// Generates a key from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a key by drawing a 32-byte seed from `rng`.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; ED25519_KEY_LENGTH]);
        rng.try_fill_bytes(&mut seed[..])
            .map_err(|err| KeyError::Entropy(err.to_string()))?;

        Ok(Self::from_seed(&seed))
    }

    pub fn from_seed(seed: &[u8; ED25519_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Imports a raw 32-byte seed.
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` for any other length.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let seed: &[u8; ED25519_KEY_LENGTH] =
            raw.try_into().map_err(|_| KeyError::InvalidKeyLength {
                algorithm: KeyAlgorithm::Ed25519,
                key_type: KeyType::Private,
                actual: raw.len(),
            })?;

        Ok(Self::from_seed(seed))
    }

    /// Signs `message` (RFC 8032, no pre-hashing).
    ///
    /// Signing is deterministic: the same key and message always give the
    /// same signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Derives the matching public key.
    pub fn create_public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey {
            point: self.signing_key.verifying_key().to_bytes(),
        }
    }
}

impl Key for Ed25519PrivateKey {
    fn key_type(&self) -> KeyType {
        KeyType::Private
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ed25519
    }

    fn to_raw_bytes(&self) -> Vec<u8> {
        self.signing_key.to_bytes().to_vec()
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        pkcs8::encode_ed25519(&Zeroizing::new(self.signing_key.to_bytes()))
    }
}

impl fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519PrivateKey").finish_non_exhaustive()
    }
}

/// An Ed25519 public key.
///
/// Holds the 32-byte encoded point as received. Construction only checks the
/// length: an encoding that does not decompress to a curve point is kept,
/// and every verification against it returns `false`.
#[derive(Clone, Copy)]
pub struct Ed25519PublicKey {
    point: [u8; ED25519_KEY_LENGTH],
}

impl Ed25519PublicKey {
    /// Imports a raw 32-byte encoded point.
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` for any other length.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let point: [u8; ED25519_KEY_LENGTH] =
            raw.try_into().map_err(|_| KeyError::InvalidKeyLength {
                algorithm: KeyAlgorithm::Ed25519,
                key_type: KeyType::Public,
                actual: raw.len(),
            })?;

        Ok(Self { point })
    }

    /// Returns the 32-byte encoded point, exactly as carried in the SPKI
    /// `subjectPublicKey` BIT STRING.
    pub fn as_bytes(&self) -> &[u8; ED25519_KEY_LENGTH] {
        &self.point
    }

    /// Verifies an Ed25519 signature over `message`.
    ///
    /// Returns `Ok(false)` for any signature that does not verify, including
    /// when the stored point is not a valid curve point.
    ///
    /// # Errors
    ///
    /// `InvalidSignatureLength` if `signature` is not 64 bytes.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let signature: &[u8; SIGNATURE_LENGTH] =
            signature
                .try_into()
                .map_err(|_| KeyError::InvalidSignatureLength {
                    expected: SIGNATURE_LENGTH,
                    actual: signature.len(),
                })?;

        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.point) else {
            return Ok(false);
        };

        Ok(verifying_key
            .verify(message, &Signature::from_bytes(signature))
            .is_ok())
    }
}

impl Key for Ed25519PublicKey {
    fn key_type(&self) -> KeyType {
        KeyType::Public
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ed25519
    }

    fn to_raw_bytes(&self) -> Vec<u8> {
        self.point.to_vec()
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        spki::encode_ed25519(&self.point)
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ed25519PublicKey")
            .field(&encode(&self.point))
            .finish()
    }
}
