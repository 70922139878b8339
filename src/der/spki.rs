//! SubjectPublicKeyInfo encoding and decoding.

use super::{
    Algorithm, AlgorithmIdentifier, AlgorithmIdentifierOut, PublicKeyMaterial, encode_failed,
    malformed,
};
use crate::error::{KeyError, Result};

#[derive(asn1::Asn1Read)]
struct SubjectPublicKeyInfo<'a> {
    algorithm: AlgorithmIdentifier<'a>,
    subject_public_key: asn1::BitString<'a>,
}

#[derive(asn1::Asn1Write)]
struct SubjectPublicKeyInfoOut<'a> {
    algorithm: AlgorithmIdentifierOut,
    subject_public_key: asn1::BitString<'a>,
}

/// Encodes a 32-byte Ed25519 point as SPKI.
pub(crate) fn encode_ed25519(point: &[u8; 32]) -> Result<Vec<u8>> {
    encode(AlgorithmIdentifierOut::ed25519(), point)
}

/// Encodes a 33-byte compressed secp256k1 point as SPKI.
pub(crate) fn encode_secp256k1(point: &[u8; 33]) -> Result<Vec<u8>> {
    encode(AlgorithmIdentifierOut::secp256k1(), point)
}

fn encode(algorithm: AlgorithmIdentifierOut, point: &[u8]) -> Result<Vec<u8>> {
    let subject_public_key = asn1::BitString::new(point, 0)
        .ok_or_else(|| KeyError::InvalidDer("failed to encode subjectPublicKey".into()))?;

    let info = SubjectPublicKeyInfoOut {
        algorithm,
        subject_public_key,
    };
    asn1::write_single(&info).map_err(encode_failed("SubjectPublicKeyInfo"))
}

/// Parses an SPKI container into algorithm-tagged public material.
///
/// The point bytes are returned as found. Length and curve membership are
/// checked when the key is constructed.
///
/// # Errors
///
/// - `InvalidDer` for malformed ASN.1 or a BIT STRING with unused bits.
/// - `UnsupportedAlgorithm` / `CurveMismatch` as reported by the
///   AlgorithmIdentifier.
pub(crate) fn decode(der: &[u8]) -> Result<PublicKeyMaterial> {
    let info: SubjectPublicKeyInfo<'_> =
        asn1::parse_single(der).map_err(malformed("SubjectPublicKeyInfo"))?;

    if info.subject_public_key.padding_bits() != 0 {
        return Err(KeyError::InvalidDer(
            "subjectPublicKey has unused bits".into(),
        ));
    }
    let point = info.subject_public_key.as_bytes().to_vec();

    Ok(match info.algorithm.classify()? {
        Algorithm::Ed25519 => PublicKeyMaterial::Ed25519(point),
        Algorithm::Secp256k1 => PublicKeyMaterial::Secp256k1(point),
    })
}
