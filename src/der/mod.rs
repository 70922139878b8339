//! DER codec for PKCS#8 and SubjectPublicKeyInfo containers.
//!
//! This layer only knows about ASN.1 structure and OIDs. It turns container
//! bytes into algorithm-tagged raw material and back, and leaves every
//! curve-level check (point validity, scalar range) to the key types.
//!
//! # Shapes produced
//!
//! ```text
//! PrivateKeyInfo ::= SEQUENCE {
//!   version             INTEGER (0),
//!   privateKeyAlgorithm AlgorithmIdentifier,
//!   privateKey          OCTET STRING
//! }
//!
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!   algorithm           AlgorithmIdentifier,
//!   subjectPublicKey    BIT STRING
//! }
//! ```
//!
//! - Ed25519 uses OID 1.3.101.112 with no parameters. The PKCS#8 payload is
//!   an OCTET STRING holding the 32-byte seed (RFC 8410).
//! - ECDSA uses id-ecPublicKey with the secp256k1 named-curve OID as
//!   parameters. The PKCS#8 payload is an `ECPrivateKey` (RFC 5915) carrying
//!   the scalar and the compressed public point.
//!
//! Parsing is more permissive than encoding. It also accepts PKCS#8 v2
//! (`OneAsymmetricKey`) and OpenSSL's uncompressed points. A bare scalar as
//! the EC payload is accepted too.

mod oids;
pub(crate) mod pkcs8;
pub(crate) mod spki;

pub use oids::{OID_EC_PUBLIC_KEY, OID_ED25519, OID_SECP256K1};

use zeroize::Zeroizing;

use crate::error::KeyError;

/// AlgorithmIdentifier as read from input.
///
/// Parameters are kept as a raw TLV so that an unknown algorithm can be
/// reported by OID before its parameters are interpreted.
#[derive(asn1::Asn1Read)]
struct AlgorithmIdentifier<'a> {
    algorithm: asn1::ObjectIdentifier,
    parameters: Option<asn1::Tlv<'a>>,
}

/// AlgorithmIdentifier as written: parameters are absent or a named curve.
#[derive(asn1::Asn1Write)]
struct AlgorithmIdentifierOut {
    algorithm: asn1::ObjectIdentifier,
    parameters: Option<asn1::ObjectIdentifier>,
}

impl AlgorithmIdentifierOut {
    fn ed25519() -> Self {
        Self {
            algorithm: OID_ED25519,
            parameters: None,
        }
    }

    fn secp256k1() -> Self {
        Self {
            algorithm: OID_EC_PUBLIC_KEY,
            parameters: Some(OID_SECP256K1),
        }
    }
}

/// Algorithm named by a parsed AlgorithmIdentifier.
enum Algorithm {
    Ed25519,
    Secp256k1,
}

impl AlgorithmIdentifier<'_> {
    /// Maps the identifier onto a supported algorithm.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` for any OID other than Ed25519 and
    ///   id-ecPublicKey.
    /// - `CurveMismatch` when EC parameters are absent, are not a named
    ///   curve, or name a curve other than secp256k1.
    /// - `InvalidDer` when Ed25519 carries parameters.
    fn classify(&self) -> Result<Algorithm, KeyError> {
        if self.algorithm == OID_ED25519 {
            if self.parameters.is_some() {
                return Err(KeyError::InvalidDer(
                    "Ed25519 AlgorithmIdentifier must not carry parameters".into(),
                ));
            }
            return Ok(Algorithm::Ed25519);
        }

        if self.algorithm != OID_EC_PUBLIC_KEY {
            return Err(KeyError::UnsupportedAlgorithm(self.algorithm.to_string()));
        }

        let Some(parameters) = &self.parameters else {
            return Err(KeyError::CurveMismatch("absent".into()));
        };
        match parameters.parse::<asn1::ObjectIdentifier>() {
            Ok(curve) if curve == OID_SECP256K1 => Ok(Algorithm::Secp256k1),
            Ok(curve) => Err(KeyError::CurveMismatch(curve.to_string())),
            Err(_) => Err(KeyError::CurveMismatch("non-named-curve parameters".into())),
        }
    }
}

/// Raw private material recovered from a PKCS#8 container.
pub(crate) enum PrivateKeyMaterial {
    Ed25519(Zeroizing<[u8; 32]>),
    /// Big-endian scalar, left-padded to 32 bytes. Range is not checked here.
    Secp256k1(Zeroizing<[u8; 32]>),
}

/// Raw public material recovered from an SPKI container.
pub(crate) enum PublicKeyMaterial {
    Ed25519(Vec<u8>),
    /// SEC1 point in whatever form the container held.
    Secp256k1(Vec<u8>),
}

fn malformed(what: &'static str) -> impl FnOnce(asn1::ParseError) -> KeyError {
    move |err| KeyError::InvalidDer(format!("{what}: {err:?}"))
}

fn encode_failed(what: &'static str) -> impl FnOnce(asn1::WriteError) -> KeyError {
    move |_| KeyError::InvalidDer(format!("failed to encode {what}"))
}
