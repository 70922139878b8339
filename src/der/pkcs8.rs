//! PKCS#8 `PrivateKeyInfo` encoding and decoding.

use zeroize::Zeroizing;

use super::{
    Algorithm, AlgorithmIdentifier, AlgorithmIdentifierOut, OID_SECP256K1, PrivateKeyMaterial,
    encode_failed, malformed,
};
use crate::error::{KeyError, Result};
use crate::format::{KeyAlgorithm, KeyType};

/// Length of an Ed25519 seed and of a secp256k1 scalar.
const SECRET_LEN: usize = 32;

/// PrivateKeyInfo (v1) or OneAsymmetricKey (v2) as read.
///
/// A trailing `[1]` public key is tolerated and ignored. Attributes are not
/// accepted.
#[derive(asn1::Asn1Read)]
struct PrivateKeyInfo<'a> {
    version: u8,
    algorithm: AlgorithmIdentifier<'a>,
    private_key: &'a [u8],
    #[implicit(1)]
    _public_key: Option<asn1::BitString<'a>>,
}

#[derive(asn1::Asn1Write)]
struct PrivateKeyInfoOut<'a> {
    version: u8,
    algorithm: AlgorithmIdentifierOut,
    private_key: &'a [u8],
}

/// ECPrivateKey (RFC 5915).
///
/// ```text
/// ECPrivateKey ::= SEQUENCE {
///   version        INTEGER { ecPrivkeyVer1(1) },
///   privateKey     OCTET STRING,
///   parameters [0] ECParameters OPTIONAL,
///   publicKey  [1] BIT STRING OPTIONAL
/// }
/// ```
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct EcPrivateKey<'a> {
    version: u8,
    private_key: &'a [u8],
    #[explicit(0)]
    parameters: Option<asn1::ObjectIdentifier>,
    #[explicit(1)]
    public_key: Option<asn1::BitString<'a>>,
}

/// Encodes an Ed25519 seed as PKCS#8.
///
/// The seed is wrapped twice: once as the `CurvePrivateKey` OCTET STRING
/// and once as the PrivateKeyInfo `privateKey` field.
pub(crate) fn encode_ed25519(seed: &[u8; SECRET_LEN]) -> Result<Vec<u8>> {
    let inner = Zeroizing::new(
        asn1::write_single(&seed.as_slice()).map_err(encode_failed("CurvePrivateKey"))?,
    );

    let info = PrivateKeyInfoOut {
        version: 0,
        algorithm: AlgorithmIdentifierOut::ed25519(),
        private_key: inner.as_slice(),
    };
    asn1::write_single(&info).map_err(encode_failed("PrivateKeyInfo"))
}

/// Encodes a secp256k1 scalar and its compressed public point as PKCS#8.
///
/// The curve is named once, in the outer AlgorithmIdentifier. The inner
/// `ECPrivateKey` omits `[0]` parameters and always carries `[1]`.
pub(crate) fn encode_secp256k1(scalar: &[u8; SECRET_LEN], compressed_point: &[u8; 33]) -> Result<Vec<u8>> {
    let public_key = asn1::BitString::new(compressed_point, 0)
        .ok_or_else(|| KeyError::InvalidDer("failed to encode public point".into()))?;

    let ec_key = EcPrivateKey {
        version: 1,
        private_key: scalar,
        parameters: None,
        public_key: Some(public_key),
    };
    let inner = Zeroizing::new(asn1::write_single(&ec_key).map_err(encode_failed("ECPrivateKey"))?);

    let info = PrivateKeyInfoOut {
        version: 0,
        algorithm: AlgorithmIdentifierOut::secp256k1(),
        private_key: inner.as_slice(),
    };
    asn1::write_single(&info).map_err(encode_failed("PrivateKeyInfo"))
}

/// Parses a PKCS#8 container into algorithm-tagged private material.
///
/// # Errors
///
/// - `InvalidDer` for malformed ASN.1 or an unknown version.
/// - `UnsupportedAlgorithm` / `CurveMismatch` as reported by the
///   AlgorithmIdentifier.
/// - `InvalidKeyLength` for a seed that is not 32 bytes, or a scalar that is
///   empty or longer than 32 bytes.
pub(crate) fn decode(der: &[u8]) -> Result<PrivateKeyMaterial> {
    let info: PrivateKeyInfo<'_> = asn1::parse_single(der).map_err(malformed("PrivateKeyInfo"))?;

    if info.version > 1 {
        return Err(KeyError::InvalidDer(format!(
            "unsupported PrivateKeyInfo version {}",
            info.version
        )));
    }

    match info.algorithm.classify()? {
        Algorithm::Ed25519 => decode_ed25519(info.private_key).map(PrivateKeyMaterial::Ed25519),
        Algorithm::Secp256k1 => {
            decode_secp256k1(info.private_key).map(PrivateKeyMaterial::Secp256k1)
        }
    }
}

fn decode_ed25519(payload: &[u8]) -> Result<Zeroizing<[u8; SECRET_LEN]>> {
    let bytes: &[u8] = asn1::parse_single(payload).map_err(malformed("CurvePrivateKey"))?;

    let seed: [u8; SECRET_LEN] = bytes.try_into().map_err(|_| KeyError::InvalidKeyLength {
        algorithm: KeyAlgorithm::Ed25519,
        key_type: KeyType::Private,
        actual: bytes.len(),
    })?;
    Ok(Zeroizing::new(seed))
}

fn decode_secp256k1(payload: &[u8]) -> Result<Zeroizing<[u8; SECRET_LEN]>> {
    let scalar = match asn1::parse_single::<EcPrivateKey<'_>>(payload) {
        Ok(ec_key) => {
            if ec_key.version != 1 {
                return Err(KeyError::InvalidDer(format!(
                    "unsupported ECPrivateKey version {}",
                    ec_key.version
                )));
            }
            if let Some(curve) = &ec_key.parameters {
                if *curve != OID_SECP256K1 {
                    return Err(KeyError::CurveMismatch(curve.to_string()));
                }
            }
            // the embedded public point is recomputed on export, never trusted
            ec_key.private_key
        }
        Err(err) => match asn1::parse_single::<&[u8]>(payload) {
            Ok(bare) => {
                tracing::debug!("accepting bare scalar as EC PKCS#8 payload");
                bare
            }
            Err(_) => return Err(malformed("ECPrivateKey")(err)),
        },
    };

    if scalar.is_empty() || scalar.len() > SECRET_LEN {
        return Err(KeyError::InvalidKeyLength {
            algorithm: KeyAlgorithm::Ecdsa,
            key_type: KeyType::Private,
            actual: scalar.len(),
        });
    }

    let mut padded = Zeroizing::new([0u8; SECRET_LEN]);
    padded[SECRET_LEN - scalar.len()..].copy_from_slice(scalar);
    Ok(padded)
}
