// Copyright (C) Microsoft Corporation. All rights reserved.

use rsa_padding::PssPadding;
use rsa_padding::PssParameters;
use test_log::test;

use super::*;

const TBS: &[u8] = b"data to be signed";

#[test]
fn test_rsa_generate_sizes() {
    for bits in [2048, 3072] {
        let key = RsaPrivateKey::generate(bits).unwrap();
        assert_eq!(key.bits(), bits);
        assert_eq!(key.size(), bits / 8);

        let public = key.public_key().unwrap();
        assert_eq!(public.bits(), bits);
    }
}

#[test]
fn test_rsa_generate_rejects_invalid_size() {
    assert_eq!(
        RsaPrivateKey::generate(512).err(),
        Some(CryptoError::RsaInvalidKeySize(512))
    );
    assert_eq!(
        RsaPrivateKey::generate(2047).err(),
        Some(CryptoError::RsaInvalidKeySize(2047))
    );
}

#[test]
fn test_rsa_der_import_export() {
    let key = RsaPrivateKey::generate(2048).unwrap();
    let der = key.to_der().unwrap();
    let imported = RsaPrivateKey::from_der(&der).unwrap();
    assert_eq!(imported.to_der().unwrap(), der);

    let public_der = key.public_key().unwrap().to_der().unwrap();
    let public = RsaPublicKey::from_der(&public_der).unwrap();
    assert_eq!(public.to_der().unwrap(), public_der);
}

#[test]
fn test_rsa_import_rejects_ec_key() {
    let ec = EccPrivateKey::generate(EccCurve::P256).unwrap();
    let der = ec.to_der().unwrap();
    assert_eq!(
        RsaPrivateKey::from_der(&der).err(),
        Some(CryptoError::RsaKeyImportError)
    );
}

/// Raw PKCS#1 over a DigestInfo is a standard PKCS#1 v1.5 signature.
#[test]
fn test_rsa_sign_raw_pkcs1_verifies() {
    let key = RsaPrivateKey::generate(2048).unwrap();
    let public = key.public_key().unwrap();

    for hash in [
        HashAlgo::Sha1,
        HashAlgo::Sha256,
        HashAlgo::Sha384,
        HashAlgo::Sha512,
    ] {
        let digest_info = DerDigestInfo::compute(hash, TBS).unwrap().to_der().unwrap();
        let signature = rsa_sign_raw(&key, &digest_info, RawRsaPadding::Pkcs1).unwrap();
        assert_eq!(signature.len(), 256);
        assert!(rsa_verify_pkcs1(&public, hash, TBS, &signature).unwrap());
        assert!(!rsa_verify_pkcs1(&public, hash, b"other data", &signature).unwrap());

        let recovered = rsa_recover_raw(&public, &signature, RawRsaPadding::Pkcs1).unwrap();
        assert_eq!(recovered, digest_info);
    }
}

/// Raw exponentiation of a PSS encoded message is a standard PSS signature.
#[test]
fn test_rsa_sign_raw_none_with_pss_block() {
    let key = RsaPrivateKey::generate(2048).unwrap();
    let public = key.public_key().unwrap();

    let params = PssParameters::new(key.bits(), HashAlgo::Sha256.into()).unwrap();
    let engine = PssPadding::new(params, padding_hash, padding_rng);
    let em = engine.encode(TBS).unwrap();

    let signature = rsa_sign_raw(&key, &em, RawRsaPadding::None).unwrap();
    assert_eq!(signature.len(), 256);
    assert!(rsa_verify_pss(&public, HashAlgo::Sha256, 32, TBS, &signature).unwrap());
    assert!(!rsa_verify_pss(&public, HashAlgo::Sha256, 20, TBS, &signature).unwrap());

    let recovered = rsa_recover_raw(&public, &signature, RawRsaPadding::None).unwrap();
    assert_eq!(recovered, em);
    assert!(engine.verify(TBS, &recovered).unwrap());
}

#[test]
fn test_rsa_sign_raw_rejects_long_input() {
    let key = RsaPrivateKey::generate(2048).unwrap();
    assert_eq!(
        rsa_sign_raw(&key, &[0u8; 246], RawRsaPadding::Pkcs1),
        Err(CryptoError::RsaInvalidInputSize)
    );
    assert_eq!(
        rsa_sign_raw(&key, &[0u8; 257], RawRsaPadding::None),
        Err(CryptoError::RsaInvalidInputSize)
    );
}

#[test]
fn test_is_valid_rsa_key_size() {
    assert!(is_valid_rsa_key_size(1024));
    assert!(is_valid_rsa_key_size(3072));
    assert!(is_valid_rsa_key_size(8192));
    assert!(!is_valid_rsa_key_size(1016));
    assert!(!is_valid_rsa_key_size(2050));
    assert!(!is_valid_rsa_key_size(16384));
}
