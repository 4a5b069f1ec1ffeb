// Copyright (C) Microsoft Corporation. All rights reserved.

use test_log::test;

use super::*;

const ABC_SHA256: [u8; 32] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
    0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

#[test]
fn test_sha256_abc() {
    let digest = HashAlgo::Sha256.hash(b"abc").unwrap();
    assert_eq!(digest, ABC_SHA256);
}

#[test]
fn test_digest_sizes() {
    for algo in [
        HashAlgo::Sha1,
        HashAlgo::Sha256,
        HashAlgo::Sha384,
        HashAlgo::Sha512,
    ] {
        let digest = algo.hash(b"size check").unwrap();
        assert_eq!(digest.len(), algo.size());
        assert_eq!(digest.len(), RsaDigestKind::from(algo).hash_len());
    }
}

/// The padding adapter hashes with the matching algorithm.
#[test]
fn test_padding_hash_matches_hash_algo() {
    let expected = HashAlgo::Sha384.hash(b"padding").unwrap();
    let actual = padding_hash(RsaDigestKind::Sha384, b"padding").unwrap();
    assert_eq!(expected, actual);
}
