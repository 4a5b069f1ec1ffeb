// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA PKCS#1 v1.5 signatures.
//!
//! The digest is wrapped in a DER `DigestInfo` and handed to the raw RSA
//! primitive with block type 1 padding. The signature value is the same for
//! every container type.

use signservice_crypto::rsa_sign_raw;
use signservice_crypto::DerDigestInfo;
use signservice_crypto::RawRsaPadding;

use super::*;

/// Signer for plain (non-PSS) RSA algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsaPkcs1Signer;

impl RsaPkcs1Signer {
    /// Returns a signature exactly as long as the key modulus.
    ///
    /// # Errors
    ///
    /// * [`SignError::WrongAlgorithmKind`] if `algorithm` is not a plain RSA
    ///   signature algorithm.
    /// * [`SignError::KeyMismatch`] if `key` is not an RSA key.
    /// * [`SignError::Crypto`] if hashing or the RSA primitive fails.
    pub fn sign(
        &self,
        tbs: &[u8],
        key: &PrivateKey,
        algorithm: &AlgorithmDescriptor,
    ) -> SignResult<Vec<u8>> {
        if algorithm.is_pss() || algorithm.key_family() != Some(KeyFamily::Rsa) {
            return Err(wrong_algorithm_kind(SignerKind::RsaPkcs1, algorithm));
        }
        let PrivateKey::Rsa(rsa_key) = key else {
            return Err(key_mismatch(SignerKind::RsaPkcs1, KeyFamily::Rsa, key));
        };

        let digest_info = DerDigestInfo::compute(algorithm.digest(), tbs)?.to_der()?;
        let signature = rsa_sign_raw(rsa_key, &digest_info, RawRsaPadding::Pkcs1)?;

        tracing::debug!(
            algorithm = algorithm.uri(),
            len = signature.len(),
            "created RSA PKCS#1 v1.5 signature"
        );
        Ok(signature)
    }
}
