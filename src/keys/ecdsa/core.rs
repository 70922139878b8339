//! Core secp256k1 private and public key types.

use core::fmt;

use k256::ecdsa::signature::DigestVerifier;
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::ops::{Invert, Reduce};
use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, NonZeroScalar, ProjectivePoint, Scalar, U256};
use rand_core::{CryptoRng, OsRng, RngCore};
use rfc6979::HmacDrbg;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::der::{pkcs8, spki};
use crate::encoding::hex::encode;
use crate::error::{KeyError, Result};
use crate::format::{KeyAlgorithm, KeyType};
use crate::hash::{keccak256, keccak256_state};
use crate::keys::{Key, SIGNATURE_LENGTH};

/// Length of a big-endian private scalar.
pub const ECDSA_SCALAR_LENGTH: usize = 32;

/// Length of a SEC1 compressed point (`0x02`/`0x03` prefix + x).
pub const ECDSA_COMPRESSED_POINT_LENGTH: usize = 33;

/// Length of a SEC1 uncompressed point (`0x04` prefix + x + y).
pub const ECDSA_UNCOMPRESSED_POINT_LENGTH: usize = 65;

/// A secp256k1 private key.
#[derive(Clone)]
pub struct EcdsaPrivateKey {
    signing_key: SigningKey,
}

impl EcdsaPrivateKey {
    /// Generates a key from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a key by rejection sampling 32-byte candidates from `rng`.
    ///
    /// Candidates equal to zero or not below the group order are discarded
    /// and redrawn, so the result is uniform over `[1, n)`.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut candidate = Zeroizing::new([0u8; ECDSA_SCALAR_LENGTH]);
            rng.try_fill_bytes(&mut candidate[..])
                .map_err(|err| KeyError::Entropy(err.to_string()))?;

            match SigningKey::from_slice(&candidate[..]) {
                Ok(signing_key) => return Ok(Self { signing_key }),
                Err(_) => tracing::trace!(attempt, "rejected out-of-range secp256k1 scalar"),
            }
        }
    }

    /// Imports a raw 32-byte big-endian scalar.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength` unless `raw` is exactly 32 bytes.
    /// - `InvalidScalar` if the scalar is zero or not below the group order.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() != ECDSA_SCALAR_LENGTH {
            return Err(KeyError::InvalidKeyLength {
                algorithm: KeyAlgorithm::Ecdsa,
                key_type: KeyType::Private,
                actual: raw.len(),
            });
        }

        let signing_key = SigningKey::from_slice(raw).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self { signing_key })
    }

    /// Signs the Keccak-256 digest of `message`.
    ///
    /// The nonce `k` is derived per RFC 6979 with HMAC-SHA256, so signing is
    /// deterministic. `s = k⁻¹(z + r·d)` is emitted as computed, without
    /// low-S normalisation, so about half of all signatures are high-S. The
    /// result is `r || s`, each 32 bytes big-endian.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        let z = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(keccak256(message)));
        let d = self.signing_key.as_nonzero_scalar();

        let mut drbg = HmacDrbg::<Sha256>::new(&self.scalar()[..], &z.to_bytes(), &[]);
        loop {
            let mut candidate = Zeroizing::new([0u8; ECDSA_SCALAR_LENGTH]);
            drbg.fill_bytes(&mut candidate[..]);

            // k outside [1, n) or a zero r or s draws the next candidate
            let Some(k) =
                Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(FieldBytes::from(*candidate)))
            else {
                continue;
            };

            let r_point = (ProjectivePoint::GENERATOR * *k).to_affine();
            let r = <Scalar as Reduce<U256>>::reduce_bytes(&r_point.x());
            let s = *Invert::invert(&k) * (z + r * d.as_ref());
            if r == Scalar::ZERO || s == Scalar::ZERO {
                continue;
            }

            let mut out = [0u8; SIGNATURE_LENGTH];
            out[..ECDSA_SCALAR_LENGTH].copy_from_slice(&r.to_bytes());
            out[ECDSA_SCALAR_LENGTH..].copy_from_slice(&s.to_bytes());
            return out;
        }
    }

    /// Derives `Q = d·G`.
    pub fn create_public_key(&self) -> EcdsaPublicKey {
        EcdsaPublicKey::from_verifying_key(VerifyingKey::from(&self.signing_key))
    }

    fn scalar(&self) -> Zeroizing<[u8; ECDSA_SCALAR_LENGTH]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }
}

impl Key for EcdsaPrivateKey {
    fn key_type(&self) -> KeyType {
        KeyType::Private
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ecdsa
    }

    fn to_raw_bytes(&self) -> Vec<u8> {
        self.scalar().to_vec()
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        pkcs8::encode_secp256k1(&self.scalar(), &self.create_public_key().compressed)
    }
}

impl fmt::Debug for EcdsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaPrivateKey").finish_non_exhaustive()
    }
}

/// A secp256k1 public key, canonically stored as a compressed point.
#[derive(Clone)]
pub struct EcdsaPublicKey {
    verifying_key: VerifyingKey,
    compressed: [u8; ECDSA_COMPRESSED_POINT_LENGTH],
}

impl EcdsaPublicKey {
    /// Imports a SEC1 point, compressed (33 bytes) or uncompressed (65).
    ///
    /// Uncompressed input is re-encoded to the compressed form, so both
    /// forms of the same point produce identical keys.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength` for any length other than 33 or 65.
    /// - `InvalidPoint` for a prefix that does not match the length, or a
    ///   point that is not on the curve.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let prefix_ok = match raw.len() {
            ECDSA_COMPRESSED_POINT_LENGTH => matches!(raw[0], 0x02 | 0x03),
            ECDSA_UNCOMPRESSED_POINT_LENGTH => raw[0] == 0x04,
            actual => {
                return Err(KeyError::InvalidKeyLength {
                    algorithm: KeyAlgorithm::Ecdsa,
                    key_type: KeyType::Public,
                    actual,
                });
            }
        };
        if !prefix_ok {
            return Err(KeyError::InvalidPoint(format!(
                "SEC1 prefix 0x{:02x} does not match a {}-byte encoding",
                raw[0],
                raw.len()
            )));
        }

        let verifying_key = VerifyingKey::from_sec1_bytes(raw)
            .map_err(|_| KeyError::InvalidPoint("not a point on secp256k1".into()))?;

        if raw.len() == ECDSA_UNCOMPRESSED_POINT_LENGTH {
            tracing::debug!("compressing uncompressed secp256k1 point");
        }
        Ok(Self::from_verifying_key(verifying_key))
    }

    fn from_verifying_key(verifying_key: VerifyingKey) -> Self {
        let encoded = verifying_key.as_affine().to_encoded_point(true);

        // a verifying key is never the identity, so the compressed form is 33 bytes
        let mut compressed = [0u8; ECDSA_COMPRESSED_POINT_LENGTH];
        compressed.copy_from_slice(encoded.as_bytes());

        Self {
            verifying_key,
            compressed,
        }
    }

    /// Returns the 33-byte compressed point, exactly as carried in the SPKI
    /// `subjectPublicKey` BIT STRING.
    pub fn as_bytes(&self) -> &[u8; ECDSA_COMPRESSED_POINT_LENGTH] {
        &self.compressed
    }

    /// Returns the 65-byte uncompressed SEC1 encoding of the point.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.verifying_key
            .as_affine()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// Verifies an `r || s` signature over the Keccak-256 digest of
    /// `message`.
    ///
    /// Both the low-S and the high-S form of a valid signature are
    /// accepted. Scalars out of range yield `Ok(false)`.
    ///
    /// # Errors
    ///
    /// `InvalidSignatureLength` if `signature` is not 64 bytes.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.len() != SIGNATURE_LENGTH {
            return Err(KeyError::InvalidSignatureLength {
                expected: SIGNATURE_LENGTH,
                actual: signature.len(),
            });
        }

        let Ok(signature) = Signature::from_slice(signature) else {
            return Ok(false);
        };
        let signature = signature.normalize_s().unwrap_or(signature);

        Ok(self
            .verifying_key
            .verify_digest(keccak256_state(message), &signature)
            .is_ok())
    }
}

impl Key for EcdsaPublicKey {
    fn key_type(&self) -> KeyType {
        KeyType::Public
    }

    fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ecdsa
    }

    fn to_raw_bytes(&self) -> Vec<u8> {
        self.compressed.to_vec()
    }

    fn to_der(&self) -> Result<Vec<u8>> {
        spki::encode_secp256k1(&self.compressed)
    }
}

impl fmt::Debug for EcdsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EcdsaPublicKey")
            .field(&encode(&self.compressed))
            .finish()
    }
}
