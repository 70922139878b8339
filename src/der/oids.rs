//! Object identifiers used by the key containers.

/// Ed25519 (RFC 8410).
///
/// OID: 1.3.101.112
pub const OID_ED25519: asn1::ObjectIdentifier = asn1::oid!(1, 3, 101, 112);

/// id-ecPublicKey (RFC 5480).
///
/// OID: 1.2.840.10045.2.1
pub const OID_EC_PUBLIC_KEY: asn1::ObjectIdentifier = asn1::oid!(1, 2, 840, 10045, 2, 1);

/// secp256k1 named curve (SEC 2).
///
/// OID: 1.3.132.0.10
pub const OID_SECP256K1: asn1::ObjectIdentifier = asn1::oid!(1, 3, 132, 0, 10);
