// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;
use test_log::test;

const SHA256_DIGEST_INFO_PREFIX: &[u8] = &[
    0x30, 0x31, // SEQUENCE, 49 bytes
    0x30, 0x0d, // AlgorithmIdentifier, 13 bytes
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, // id-sha256
    0x05, 0x00, // NULL
    0x04, 0x20, // OCTET STRING, 32 bytes
];

const SHA1_DIGEST_INFO_PREFIX: &[u8] = &[
    0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14,
];

const SHA384_DIGEST_INFO_PREFIX: &[u8] = &[
    0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02,
    0x05, 0x00, 0x04, 0x30,
];

const SHA512_DIGEST_INFO_PREFIX: &[u8] = &[
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
    0x05, 0x00, 0x04, 0x40,
];

/// Encodings match the fixed prefixes listed in RFC 8017 Section 9.2.
#[test]
fn test_digest_info_matches_rfc_prefixes() {
    for (algo, prefix) in [
        (HashAlgo::Sha1, SHA1_DIGEST_INFO_PREFIX),
        (HashAlgo::Sha256, SHA256_DIGEST_INFO_PREFIX),
        (HashAlgo::Sha384, SHA384_DIGEST_INFO_PREFIX),
        (HashAlgo::Sha512, SHA512_DIGEST_INFO_PREFIX),
    ] {
        let info = DerDigestInfo::compute(algo, b"message").unwrap();
        let der = info.to_der().unwrap();
        assert_eq!(&der[..prefix.len()], prefix);
        assert_eq!(&der[prefix.len()..], info.digest());
    }
}

#[test]
fn test_digest_info_decode() {
    let digest: Vec<u8> = (1..=32).collect();
    let mut der = SHA256_DIGEST_INFO_PREFIX.to_vec();
    der.extend_from_slice(&digest);

    let info = DerDigestInfo::from_der(&der).unwrap();
    assert_eq!(info.algo(), HashAlgo::Sha256);
    assert_eq!(info.digest(), digest.as_slice());
}

#[test]
fn test_digest_info_rejects_wrong_size() {
    assert_eq!(
        DerDigestInfo::new(HashAlgo::Sha512, vec![0u8; 32]),
        Err(CryptoError::DerInvalidDigestSize)
    );

    // SHA-256 OID with a 20 byte digest
    let mut der = vec![0x30, 0x25];
    der.extend_from_slice(&SHA256_DIGEST_INFO_PREFIX[2..17]);
    der.extend_from_slice(&[0x04, 0x14]);
    der.extend_from_slice(&[0xaa; 20]);
    assert_eq!(
        DerDigestInfo::from_der(&der),
        Err(CryptoError::DerInvalidDigestSize)
    );
}

#[test]
fn test_digest_info_rejects_unknown_oid() {
    // md5 (1.2.840.113549.2.5)
    let der = [
        0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05, 0x05,
        0x00, 0x04, 0x10, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b,
        0x0c, 0x0d, 0x0e, 0x0f,
    ];
    assert_eq!(
        DerDigestInfo::from_der(&der),
        Err(CryptoError::DerInvalidOid)
    );
}

#[test]
fn test_digest_info_rejects_garbage() {
    assert_eq!(
        DerDigestInfo::from_der(&[0x04, 0x02, 0x00]),
        Err(CryptoError::DerAsn1DecodeError)
    );
}
