// Copyright (C) Microsoft Corporation. All rights reserved.

//! Tests for EC keys and raw ECDSA.

use test_log::test;

use super::*;

const CURVES: [EccCurve; 3] = [EccCurve::P256, EccCurve::P384, EccCurve::P521];

#[test]
fn test_curve_sizes() {
    assert_eq!(EccCurve::P256.field_size(), 32);
    assert_eq!(EccCurve::P384.field_size(), 48);
    assert_eq!(EccCurve::P521.field_size(), 66);
}

#[test]
fn test_curve_names() {
    for curve in CURVES {
        assert_eq!(curve.name().parse::<EccCurve>().unwrap(), curve);
        assert_eq!(curve.to_string(), curve.name());
    }
    assert_eq!("secp256r1".parse::<EccCurve>().unwrap(), EccCurve::P256);
    assert_eq!(
        "brainpoolP256r1".parse::<EccCurve>(),
        Err(CryptoError::EccUnsupportedCurve)
    );
}

#[test]
fn test_curve_serde() {
    let curve: EccCurve = serde_json::from_str("\"P-384\"").unwrap();
    assert_eq!(curve, EccCurve::P384);
    let curve: EccCurve = serde_json::from_str("\"prime256v1\"").unwrap();
    assert_eq!(curve, EccCurve::P256);
    assert_eq!(serde_json::to_string(&EccCurve::P521).unwrap(), "\"P-521\"");
}

#[test]
fn test_ecc_generate_and_der() {
    for curve in CURVES {
        let key = EccPrivateKey::generate(curve).unwrap();
        assert_eq!(key.curve(), curve);
        assert_eq!(key.bits(), curve.order_bits());

        let imported = EccPrivateKey::from_der(&key.to_der().unwrap()).unwrap();
        assert_eq!(imported.curve(), curve);

        let public = key.public_key().unwrap();
        let public_der = public.to_der().unwrap();
        assert_eq!(
            EccPublicKey::from_der(&public_der).unwrap().curve(),
            curve
        );
    }
}

/// Raw (r, s) pairs verify in both their DER and fixed-width forms.
#[test]
fn test_ecdsa_sign_verify() {
    for curve in CURVES {
        let key = EccPrivateKey::generate(curve).unwrap();
        let public = key.public_key().unwrap();

        let sig = ecdsa_sign_data(&key, HashAlgo::Sha256, b"tbs").unwrap();
        assert!(ecdsa_verify_signed_data(&public, HashAlgo::Sha256, b"tbs", &sig).unwrap());
        assert!(!ecdsa_verify_signed_data(&public, HashAlgo::Sha256, b"tbx", &sig).unwrap());

        let raw = sig.to_fixed_width(curve.order_bits()).unwrap();
        assert_eq!(raw.len(), 2 * curve.field_size());
        let from_raw = EcdsaSigValue::from_fixed_width(&raw).unwrap();
        let from_der = EcdsaSigValue::from_der(&sig.to_der().unwrap()).unwrap();
        assert_eq!(from_raw, sig);
        assert_eq!(from_der, sig);
    }
}

/// DER produced here is accepted by OpenSSL's own parser.
#[test]
fn test_ecdsa_der_is_openssl_compatible() {
    let key = EccPrivateKey::generate(EccCurve::P256).unwrap();
    let digest = HashAlgo::Sha256.hash(b"tbs").unwrap();
    let sig = ecdsa_sign_digest(&key, &digest).unwrap();

    let der = sig.to_der().unwrap();
    let parsed = openssl::ecdsa::EcdsaSig::from_der(&der).unwrap();
    assert_eq!(parsed.r().to_vec(), sig.r());
    assert_eq!(parsed.s().to_vec(), sig.s());
}
