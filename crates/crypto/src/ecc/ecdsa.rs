// Copyright (C) Microsoft Corporation. All rights reserved.

//! Raw ECDSA over precomputed digests.
//!
//! Signing returns the bare `(r, s)` pair; choosing between the DER and the
//! fixed-width encoding is left to the caller.

use openssl::bn::BigNum;
use openssl::ecdsa::EcdsaSig;

use super::*;

/// Signs `digest` and returns the `(r, s)` pair.
pub fn ecdsa_sign_digest(key: &EccPrivateKey, digest: &[u8]) -> Result<EcdsaSigValue, CryptoError> {
    let ec_key = key.ec_key()?;
    let sig = EcdsaSig::sign(digest, &ec_key).map_err(|openssl_error_stack| {
        tracing::error!(?openssl_error_stack, curve = %key.curve(), "ECDSA signing failed");
        CryptoError::EccSignError
    })?;

    Ok(EcdsaSigValue::new(&sig.r().to_vec(), &sig.s().to_vec()))
}

/// Hashes `data` with `hash` and signs the digest.
pub fn ecdsa_sign_data(
    key: &EccPrivateKey,
    hash: HashAlgo,
    data: &[u8],
) -> Result<EcdsaSigValue, CryptoError> {
    let digest = hash.hash(data)?;
    ecdsa_sign_digest(key, &digest)
}

/// Verifies `signature` over a precomputed `digest`.
pub fn ecdsa_verify_digest(
    key: &EccPublicKey,
    digest: &[u8],
    signature: &EcdsaSigValue,
) -> Result<bool, CryptoError> {
    let r = BigNum::from_slice(signature.r()).map_err(|_| CryptoError::EccVerifyError)?;
    let s = BigNum::from_slice(signature.s()).map_err(|_| CryptoError::EccVerifyError)?;
    let sig = EcdsaSig::from_private_components(r, s).map_err(|_| CryptoError::EccVerifyError)?;
    let ec_key = key.ec_key()?;

    sig.verify(digest, &ec_key).map_err(|openssl_error_stack| {
        tracing::error!(?openssl_error_stack, "ECDSA verification failed");
        CryptoError::EccVerifyError
    })
}

/// Hashes `data` with `hash` and verifies `signature` over the digest.
pub fn ecdsa_verify_signed_data(
    key: &EccPublicKey,
    hash: HashAlgo,
    data: &[u8],
    signature: &EcdsaSigValue,
) -> Result<bool, CryptoError> {
    let digest = hash.hash(data)?;
    ecdsa_verify_digest(key, &digest, signature)
}
