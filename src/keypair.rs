//! Private/public key pairs.

use rand_core::{CryptoRng, RngCore};

use crate::error::Result;
use crate::factory::{PrivateKey, PublicKey};
use crate::format::KeyAlgorithm;
use crate::keys::{Key, SIGNATURE_LENGTH};

/// A private key together with its derived public key.
///
/// The public half is derived once at construction, so it always matches
/// the private half.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Builds a pair by deriving the public key from `private_key`.
    pub fn of(private_key: PrivateKey) -> Self {
        let public_key = private_key.create_public_key();
        Self {
            private_key,
            public_key,
        }
    }

    /// Generates a fresh pair from the operating system's random source.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate(algorithm: KeyAlgorithm) -> Result<Self> {
        PrivateKey::generate(algorithm).map(Self::of)
    }

    /// Generates a fresh pair from `rng`.
    ///
    /// # Errors
    ///
    /// `Entropy` if the random source fails.
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(
        algorithm: KeyAlgorithm,
        rng: &mut R,
    ) -> Result<Self> {
        PrivateKey::generate_with(algorithm, rng).map(Self::of)
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.private_key.algorithm()
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.private_key.sign(message)
    }

    /// See [`PublicKey::verify`].
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        self.public_key.verify(message, signature)
    }

    /// Splits the pair into its halves.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private_key, self.public_key)
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private_key: PrivateKey) -> Self {
        Self::of(private_key)
    }
}
