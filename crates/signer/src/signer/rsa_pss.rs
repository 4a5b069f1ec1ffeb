// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSASSA-PSS signatures built on the EMSA-PSS padding engine.
//!
//! The padding engine produces the encoded message for the key's modulus
//! length, with MGF1 over the algorithm digest and a salt as long as that
//! digest. The encoded message already spans the modulus, so the raw RSA
//! primitive is applied without any further padding.

use rsa_padding::PssPadding;
use rsa_padding::PssParameters;
use signservice_crypto::padding_hash;
use signservice_crypto::padding_rng;
use signservice_crypto::rsa_recover_raw;
use signservice_crypto::rsa_sign_raw;
use signservice_crypto::RawRsaPadding;
use signservice_crypto::RsaPublicKey;

use super::*;

/// Signer for RSASSA-PSS algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsaPssSigner;

impl RsaPssSigner {
    /// Returns a signature exactly as long as the key modulus.
    ///
    /// # Errors
    ///
    /// * [`SignError::WrongAlgorithmKind`] if `algorithm` is not RSA-PSS.
    /// * [`SignError::KeyMismatch`] if `key` is not an RSA key.
    /// * [`SignError::Padding`] if the key is too small for the digest.
    /// * [`SignError::Crypto`] if the RSA primitive fails.
    pub fn sign(
        &self,
        tbs: &[u8],
        key: &PrivateKey,
        algorithm: &AlgorithmDescriptor,
    ) -> SignResult<Vec<u8>> {
        if !algorithm.is_pss() {
            return Err(wrong_algorithm_kind(SignerKind::RsaPss, algorithm));
        }
        let PrivateKey::Rsa(rsa_key) = key else {
            return Err(key_mismatch(SignerKind::RsaPss, KeyFamily::Rsa, key));
        };

        let engine = Self::engine(rsa_key.bits(), algorithm)?;
        let encoded_message = engine.encode(tbs)?;
        let signature = rsa_sign_raw(rsa_key, &encoded_message, RawRsaPadding::None)?;

        tracing::debug!(
            algorithm = algorithm.uri(),
            len = signature.len(),
            "created RSA-PSS signature"
        );
        Ok(signature)
    }

    /// Checks `signature` over `tbs` by recovering the encoded message with
    /// the public key and verifying it with the padding engine.
    pub fn verify(
        &self,
        tbs: &[u8],
        public_key: &RsaPublicKey,
        algorithm: &AlgorithmDescriptor,
        signature: &[u8],
    ) -> SignResult<bool> {
        if !algorithm.is_pss() {
            return Err(wrong_algorithm_kind(SignerKind::RsaPss, algorithm));
        }

        let engine = Self::engine(public_key.bits(), algorithm)?;
        let encoded_message = match rsa_recover_raw(public_key, signature, RawRsaPadding::None) {
            Ok(encoded_message) => encoded_message,
            Err(error) => {
                tracing::debug!(?error, "could not recover PSS encoded message");
                return Ok(false);
            }
        };
        Ok(engine.verify(tbs, &encoded_message)?)
    }

    fn engine(modulus_bits: usize, algorithm: &AlgorithmDescriptor) -> SignResult<PssPadding> {
        let params = PssParameters::new(modulus_bits, algorithm.digest().into())?;
        Ok(PssPadding::new(params, padding_hash, padding_rng))
    }
}
