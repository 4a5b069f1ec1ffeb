// Copyright (C) Microsoft Corporation. All rights reserved.

//! Raw RSA private-key operations and the matching verification helpers.
//!
//! **Note**: the sign functions here apply no message digest. With
//! [`RawRsaPadding::Pkcs1`] the input is wrapped in a block type 1 padding
//! before exponentiation, so the caller supplies the DER `DigestInfo`. With
//! [`RawRsaPadding::None`] the input is exponentiated as is and must already
//! be a full-width encoded message such as an EMSA-PSS block.

use openssl::pkey_ctx::PkeyCtx;
use openssl::rsa::Padding;
use openssl::sign::RsaPssSaltlen;
use openssl::sign::Verifier;

use super::*;

/// Padding applied by the raw RSA primitive itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawRsaPadding {
    /// Plain modular exponentiation.
    None,
    /// PKCS#1 v1.5 block type 1 (`0x00 0x01 FF.. 0x00 || input`).
    Pkcs1,
}

impl RawRsaPadding {
    fn ossl_padding(&self) -> Padding {
        match self {
            RawRsaPadding::None => Padding::NONE,
            RawRsaPadding::Pkcs1 => Padding::PKCS1,
        }
    }

    fn max_input_len(&self, key_size: usize) -> usize {
        match self {
            RawRsaPadding::None => key_size,
            RawRsaPadding::Pkcs1 => key_size.saturating_sub(11),
        }
    }
}

/// Applies the RSA private-key operation to `input`.
///
/// For [`RawRsaPadding::None`] a shorter input is left-padded with zeros to
/// the modulus length. The result is always exactly
/// [`RsaPrivateKey::size`] bytes.
pub fn rsa_sign_raw(
    key: &RsaPrivateKey,
    input: &[u8],
    padding: RawRsaPadding,
) -> Result<Vec<u8>, CryptoError> {
    let key_size = key.size();
    if input.len() > padding.max_input_len(key_size) {
        tracing::error!(
            len = input.len(),
            key_size,
            ?padding,
            "input too long for raw RSA operation"
        );
        return Err(CryptoError::RsaInvalidInputSize);
    }

    let block = match padding {
        RawRsaPadding::None if input.len() < key_size => {
            let mut block = vec![0u8; key_size];
            block[key_size - input.len()..].copy_from_slice(input);
            block
        }
        _ => input.to_vec(),
    };

    let mut pkey_ctx = PkeyCtx::new(key.pkey()).map_err(|_| CryptoError::RsaError)?;
    pkey_ctx.sign_init().map_err(|openssl_error_stack| {
        tracing::error!(?openssl_error_stack, "RSA sign init failed");
        CryptoError::RsaSignError
    })?;
    pkey_ctx
        .set_rsa_padding(padding.ossl_padding())
        .map_err(|_| CryptoError::RsaSetPropertyError)?;

    let len = pkey_ctx
        .sign(&block, None)
        .map_err(|_| CryptoError::RsaSignError)?;
    let mut signature = vec![0u8; len];
    let len = pkey_ctx
        .sign(&block, Some(&mut signature))
        .map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, "raw RSA private operation failed");
            CryptoError::RsaSignError
        })?;
    signature.truncate(len);

    // OpenSSL may drop leading zero octets; signatures are always modulus width
    if signature.len() < key_size {
        let mut padded = vec![0u8; key_size - signature.len()];
        padded.extend_from_slice(&signature);
        signature = padded;
    }

    Ok(signature)
}

/// Applies the RSA public-key operation to `signature` and removes
/// `padding`, returning the recovered block.
///
/// With [`RawRsaPadding::None`] this yields the full encoded message, e.g.
/// the EMSA-PSS block for a PSS signature.
pub fn rsa_recover_raw(
    key: &RsaPublicKey,
    signature: &[u8],
    padding: RawRsaPadding,
) -> Result<Vec<u8>, CryptoError> {
    let mut pkey_ctx = PkeyCtx::new(key.pkey()).map_err(|_| CryptoError::RsaError)?;
    pkey_ctx
        .verify_recover_init()
        .map_err(|_| CryptoError::RsaVerifyError)?;
    pkey_ctx
        .set_rsa_padding(padding.ossl_padding())
        .map_err(|_| CryptoError::RsaSetPropertyError)?;

    let len = pkey_ctx
        .verify_recover(signature, None)
        .map_err(|_| CryptoError::RsaVerifyError)?;
    let mut output = vec![0u8; len];
    let len = pkey_ctx
        .verify_recover(signature, Some(&mut output))
        .map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, "raw RSA public operation failed");
            CryptoError::RsaVerifyError
        })?;
    output.truncate(len);
    Ok(output)
}

/// Verifies a PKCS#1 v1.5 signature over `data`.
pub fn rsa_verify_pkcs1(
    key: &RsaPublicKey,
    hash: HashAlgo,
    data: &[u8],
    signature: &[u8],
) -> Result<bool, CryptoError> {
    let mut verifier = Verifier::new(hash.md(), key.pkey()).map_err(|_| CryptoError::RsaError)?;
    verifier
        .set_rsa_padding(Padding::PKCS1)
        .map_err(|_| CryptoError::RsaSetPropertyError)?;
    verify_oneshot(&mut verifier, data, signature)
}

/// Verifies an RSASSA-PSS signature over `data` with MGF1 using `hash`.
pub fn rsa_verify_pss(
    key: &RsaPublicKey,
    hash: HashAlgo,
    salt_len: usize,
    data: &[u8],
    signature: &[u8],
) -> Result<bool, CryptoError> {
    let salt_len = i32::try_from(salt_len).map_err(|_| CryptoError::RsaSetPropertyError)?;
    let mut verifier = Verifier::new(hash.md(), key.pkey()).map_err(|_| CryptoError::RsaError)?;
    verifier
        .set_rsa_padding(Padding::PKCS1_PSS)
        .map_err(|_| CryptoError::RsaSetPropertyError)?;
    verifier
        .set_rsa_pss_saltlen(RsaPssSaltlen::custom(salt_len))
        .map_err(|_| CryptoError::RsaSetPropertyError)?;
    verifier
        .set_rsa_mgf1_md(hash.md())
        .map_err(|_| CryptoError::RsaSetPropertyError)?;
    verify_oneshot(&mut verifier, data, signature)
}

// A mismatching signature surfaces from OpenSSL as an error stack, not as
// `Ok(false)`; both mean "does not verify".
fn verify_oneshot(
    verifier: &mut Verifier<'_>,
    data: &[u8],
    signature: &[u8],
) -> Result<bool, CryptoError> {
    match verifier.verify_oneshot(signature, data) {
        Ok(valid) => Ok(valid),
        Err(openssl_error_stack) => {
            tracing::debug!(?openssl_error_stack, "RSA signature rejected");
            Ok(false)
        }
    }
}
