//! Key identity.
//!
//! Two keys are the same key when their type, algorithm and raw bytes all
//! match, regardless of which concrete type holds them or which container
//! they were imported from. Equality and hashing are defined once over that
//! triple and stamped onto every key type, so a PKCS#8-imported key and a
//! raw-imported key of the same material compare equal and collide in maps.

use core::hash::{Hash, Hasher};

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::factory::{PrivateKey, PublicKey};
use crate::keys::{EcdsaPrivateKey, EcdsaPublicKey, Ed25519PrivateKey, Ed25519PublicKey, Key};

/// Returns `true` if `a` and `b` are the same key.
///
/// Raw bytes are compared in constant time.
pub fn key_eq<A: Key + ?Sized, B: Key + ?Sized>(a: &A, b: &B) -> bool {
    if a.key_type() != b.key_type() || a.algorithm() != b.algorithm() {
        return false;
    }

    let left = Zeroizing::new(a.to_raw_bytes());
    let right = Zeroizing::new(b.to_raw_bytes());
    left.as_slice().ct_eq(right.as_slice()).into()
}

/// Feeds the identity triple of `key` into `state`.
pub fn key_hash<K: Key + ?Sized, H: Hasher>(key: &K, state: &mut H) {
    key.key_type().hash(state);
    key.algorithm().hash(state);
    Zeroizing::new(key.to_raw_bytes()).as_slice().hash(state);
}

macro_rules! impl_key_identity {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                key_eq(self, other)
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                key_hash(self, state);
            }
        }
    )+};
}

macro_rules! impl_cross_identity {
    ($($a:ty => $b:ty),+ $(,)?) => {$(
        impl PartialEq<$b> for $a {
            fn eq(&self, other: &$b) -> bool {
                key_eq(self, other)
            }
        }

        impl PartialEq<$a> for $b {
            fn eq(&self, other: &$a) -> bool {
                key_eq(self, other)
            }
        }
    )+};
}

impl_key_identity!(
    Ed25519PrivateKey,
    Ed25519PublicKey,
    EcdsaPrivateKey,
    EcdsaPublicKey,
    PrivateKey,
    PublicKey,
);

impl_cross_identity!(
    PrivateKey => Ed25519PrivateKey,
    PrivateKey => EcdsaPrivateKey,
    PublicKey => Ed25519PublicKey,
    PublicKey => EcdsaPublicKey,
    PrivateKey => PublicKey,
);
