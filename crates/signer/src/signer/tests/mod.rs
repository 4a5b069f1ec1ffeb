// Copyright (C) Microsoft Corporation. All rights reserved.

use signservice_crypto::ecdsa_verify_signed_data;
use signservice_crypto::rsa_verify_pkcs1;
use signservice_crypto::rsa_verify_pss;
use signservice_crypto::EccCurve;
use signservice_crypto::EccPrivateKey;
use signservice_crypto::EcdsaSigValue;
use signservice_crypto::HashAlgo;
use signservice_crypto::RsaPrivateKey;
use test_log::test;

use super::*;

const TBS: &[u8] = b"<SignedInfo>to be signed</SignedInfo>";

fn rsa_key(bits: usize) -> PrivateKey {
    PrivateKey::Rsa(RsaPrivateKey::generate(bits).unwrap())
}

fn ec_key(curve: EccCurve) -> PrivateKey {
    PrivateKey::Ecc(EccPrivateKey::generate(curve).unwrap())
}

fn descriptor(uri: &str) -> &'static AlgorithmDescriptor {
    default_registry().get(uri).unwrap()
}

fn rsa_public(key: &PrivateKey) -> signservice_crypto::RsaPublicKey {
    match key {
        PrivateKey::Rsa(key) => key.public_key().unwrap(),
        PrivateKey::Ecc(_) => panic!("not an RSA key"),
    }
}

fn ec_public(key: &PrivateKey) -> signservice_crypto::EccPublicKey {
    match key {
        PrivateKey::Ecc(key) => key.public_key().unwrap(),
        PrivateKey::Rsa(_) => panic!("not an EC key"),
    }
}

#[test]
fn test_rsa_pkcs1_signature_verifies() {
    let key = rsa_key(2048);
    let public = rsa_public(&key);

    for (uri, hash) in [
        (uri::RSA_SHA1, HashAlgo::Sha1),
        (uri::RSA_SHA256, HashAlgo::Sha256),
        (uri::RSA_SHA384, HashAlgo::Sha384),
        (uri::RSA_SHA512, HashAlgo::Sha512),
    ] {
        let signature = RsaPkcs1Signer.sign(TBS, &key, descriptor(uri)).unwrap();
        assert_eq!(signature.len(), 256);
        assert!(rsa_verify_pkcs1(&public, hash, TBS, &signature).unwrap());
        assert!(!rsa_verify_pkcs1(&public, hash, b"tampered", &signature).unwrap());
    }
}

#[test]
fn test_rsa_pkcs1_is_deterministic() {
    let key = rsa_key(2048);
    let algorithm = descriptor(uri::RSA_SHA256);
    let first = RsaPkcs1Signer.sign(TBS, &key, algorithm).unwrap();
    let second = RsaPkcs1Signer.sign(TBS, &key, algorithm).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rsa_pkcs1_rejects_other_algorithms() {
    let key = rsa_key(2048);
    for uri in [uri::RSA_PSS_SHA256_MGF1, uri::ECDSA_SHA256, uri::SHA256] {
        assert_eq!(
            RsaPkcs1Signer.sign(TBS, &key, descriptor(uri)),
            Err(SignError::WrongAlgorithmKind {
                signer: SignerKind::RsaPkcs1,
                algorithm: uri.to_string(),
            })
        );
    }
}

#[test]
fn test_rsa_pkcs1_rejects_ec_key() {
    let key = ec_key(EccCurve::P256);
    let result = RsaPkcs1Signer.sign(TBS, &key, descriptor(uri::RSA_SHA256));
    assert_eq!(
        result,
        Err(SignError::KeyMismatch {
            signer: SignerKind::RsaPkcs1,
            expected: KeyFamily::Rsa,
            actual: KeyFamily::Ec,
        })
    );
    assert!(result.unwrap_err().is_signature_error());
}

#[test]
fn test_rsa_pss_signature_verifies() {
    let key = rsa_key(2048);
    let public = rsa_public(&key);

    let signature = RsaPssSigner
        .sign(TBS, &key, descriptor(uri::RSA_PSS_SHA256_MGF1))
        .unwrap();
    assert_eq!(signature.len(), 256);
    assert!(rsa_verify_pss(&public, HashAlgo::Sha256, 32, TBS, &signature).unwrap());
    assert!(!rsa_verify_pss(&public, HashAlgo::Sha256, 32, b"tampered", &signature).unwrap());
}

#[test]
fn test_rsa_pss_all_digests_verify() {
    let key = rsa_key(3072);
    let public = rsa_public(&key);

    for (uri, hash) in [
        (uri::RSA_PSS_SHA1_MGF1, HashAlgo::Sha1),
        (uri::RSA_PSS_SHA384_MGF1, HashAlgo::Sha384),
        (uri::RSA_PSS_SHA512_MGF1, HashAlgo::Sha512),
    ] {
        let signature = RsaPssSigner.sign(TBS, &key, descriptor(uri)).unwrap();
        assert_eq!(signature.len(), 384);
        assert!(rsa_verify_pss(&public, hash, hash.size(), TBS, &signature).unwrap());
    }
}

#[test]
fn test_rsa_pss_is_randomized() {
    let key = rsa_key(2048);
    let algorithm = descriptor(uri::RSA_PSS_SHA256_MGF1);
    let first = RsaPssSigner.sign(TBS, &key, algorithm).unwrap();
    let second = RsaPssSigner.sign(TBS, &key, algorithm).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_rsa_pss_self_verify() {
    let key = rsa_key(2048);
    let public = rsa_public(&key);
    let algorithm = descriptor(uri::RSA_PSS_SHA384_MGF1);

    let mut signature = RsaPssSigner.sign(TBS, &key, algorithm).unwrap();
    assert!(RsaPssSigner.verify(TBS, &public, algorithm, &signature).unwrap());
    assert!(!RsaPssSigner.verify(b"tampered", &public, algorithm, &signature).unwrap());

    signature[10] ^= 0x01;
    assert!(!RsaPssSigner.verify(TBS, &public, algorithm, &signature).unwrap());
}

#[test]
fn test_rsa_pss_rejects_non_pss_algorithm() {
    let key = rsa_key(2048);
    assert_eq!(
        RsaPssSigner.sign(TBS, &key, descriptor(uri::RSA_SHA256)),
        Err(SignError::WrongAlgorithmKind {
            signer: SignerKind::RsaPss,
            algorithm: uri::RSA_SHA256.to_string(),
        })
    );
}

#[test]
fn test_rsa_pss_rejects_ec_key() {
    let key = ec_key(EccCurve::P384);
    assert_eq!(
        RsaPssSigner.sign(TBS, &key, descriptor(uri::RSA_PSS_SHA256_MGF1)),
        Err(SignError::KeyMismatch {
            signer: SignerKind::RsaPss,
            expected: KeyFamily::Rsa,
            actual: KeyFamily::Ec,
        })
    );
}

#[test]
fn test_rsa_pss_key_too_small_for_digest() {
    // 8 * 64 + 8 * 64 + 9 = 1033 bits of encoded message needed
    let key = rsa_key(1024);
    let result = RsaPssSigner.sign(TBS, &key, descriptor(uri::RSA_PSS_SHA512_MGF1));
    assert!(matches!(
        result,
        Err(SignError::Padding(rsa_padding::RsaError::KeyTooSmall { .. }))
    ));
}

#[test]
fn test_ecdsa_xml_fixed_width() {
    for (curve, width) in [
        (EccCurve::P256, 64),
        (EccCurve::P384, 96),
        (EccCurve::P521, 132),
    ] {
        let key = ec_key(curve);
        let public = ec_public(&key);
        let signer = EcdsaSigner::new(SignatureContainerType::Xml);

        let signature = signer
            .sign(TBS, &key, descriptor(uri::ECDSA_SHA256))
            .unwrap();
        assert_eq!(signature.len(), width, "{curve}");

        let sig_value = EcdsaSigValue::from_fixed_width(&signature).unwrap();
        assert!(ecdsa_verify_signed_data(&public, HashAlgo::Sha256, TBS, &sig_value).unwrap());
    }
}

#[test]
fn test_ecdsa_der_containers() {
    let key = ec_key(EccCurve::P256);
    let public = ec_public(&key);

    for container in [SignatureContainerType::Pdf, SignatureContainerType::Cms] {
        let signer = EcdsaSigner::new(container);
        assert_eq!(signer.container(), container);

        let signature = signer
            .sign(TBS, &key, descriptor(uri::ECDSA_SHA384))
            .unwrap();
        assert_eq!(signature[0], 0x30);

        let sig_value = EcdsaSigValue::from_der(&signature).unwrap();
        assert!(ecdsa_verify_signed_data(&public, HashAlgo::Sha384, TBS, &sig_value).unwrap());
        assert!(!ecdsa_verify_signed_data(&public, HashAlgo::Sha384, b"tampered", &sig_value).unwrap());

        // the same (r, s) in the XML form is 64 bytes on P-256
        assert_eq!(sig_value.to_fixed_width(256).unwrap().len(), 64);
    }
}

#[test]
fn test_ecdsa_json_container_unsupported() {
    let key = ec_key(EccCurve::P256);
    let signer = EcdsaSigner::new(SignatureContainerType::Json);
    assert_eq!(
        signer.sign(TBS, &key, descriptor(uri::ECDSA_SHA256)),
        Err(SignError::UnsupportedContainerType(
            SignatureContainerType::Json
        ))
    );
}

#[test]
fn test_ecdsa_rejects_rsa_algorithm_and_key() {
    let signer = EcdsaSigner::new(SignatureContainerType::Xml);

    let key = ec_key(EccCurve::P256);
    assert_eq!(
        signer.sign(TBS, &key, descriptor(uri::RSA_SHA256)),
        Err(SignError::WrongAlgorithmKind {
            signer: SignerKind::Ecdsa,
            algorithm: uri::RSA_SHA256.to_string(),
        })
    );

    let key = rsa_key(2048);
    assert_eq!(
        signer.sign(TBS, &key, descriptor(uri::ECDSA_SHA256)),
        Err(SignError::KeyMismatch {
            signer: SignerKind::Ecdsa,
            expected: KeyFamily::Ec,
            actual: KeyFamily::Rsa,
        })
    );
}

#[test]
fn test_signer_enum_dispatch() {
    let rsa = rsa_key(2048);
    let ec = ec_key(EccCurve::P256);

    let signer = Signer::RsaPkcs1(RsaPkcs1Signer);
    assert_eq!(signer.kind(), SignerKind::RsaPkcs1);
    assert_eq!(
        signer.sign(TBS, &rsa, descriptor(uri::RSA_SHA256)).unwrap().len(),
        256
    );

    let signer = Signer::RsaPss(RsaPssSigner);
    assert_eq!(signer.kind(), SignerKind::RsaPss);
    assert_eq!(
        signer
            .sign(TBS, &rsa, descriptor(uri::RSA_PSS_SHA256_MGF1))
            .unwrap()
            .len(),
        256
    );

    let signer = Signer::Ecdsa(EcdsaSigner::new(SignatureContainerType::Xml));
    assert_eq!(signer.kind(), SignerKind::Ecdsa);
    assert_eq!(
        signer.sign(TBS, &ec, descriptor(uri::ECDSA_SHA512)).unwrap().len(),
        64
    );
}

#[test]
fn test_signer_kind_display() {
    assert_eq!(SignerKind::RsaPkcs1.to_string(), "RSA PKCS#1 v1.5");
    assert_eq!(SignerKind::RsaPss.to_string(), "RSA-PSS");
    assert_eq!(SignerKind::Ecdsa.to_string(), "ECDSA");
}
