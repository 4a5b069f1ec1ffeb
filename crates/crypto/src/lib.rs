// Copyright (C) Microsoft Corporation. All rights reserved.

//! Cryptographic provider boundary for the signature service.
//!
//! This crate owns everything the signing strategies need below the level of
//! padding and encoding decisions:
//!
//! - **Hash**: SHA-1 and SHA-2 message digests
//! - **DER**: PKCS#1 `DigestInfo` and the `ECDSA-Sig-Value` structure
//! - **RSA**: key generation/import/export and raw private-key operations
//! - **ECC**: NIST curve keys (P-256, P-384, P-521) and raw ECDSA
//! - **RNG**: cryptographically secure random bytes
//!
//! All primitives are backed by OpenSSL. OpenSSL error stacks are logged
//! through `tracing` and never leak past this crate; callers only see
//! [`CryptoError`].

mod der;
mod ecc;
mod hash;
mod key;
mod rand;
mod rsa;

pub use der::*;
pub use ecc::*;
pub use hash::*;
pub use key::*;
pub use rand::*;
pub use rsa::*;
use thiserror::Error;

/// Error type for all provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    // Hash-related errors
    /// Hashing operation failed.
    #[error("hashing operation failed")]
    HashError,
    /// Digest algorithm is not supported for the requested operation.
    #[error("unsupported digest algorithm")]
    HashUnsupportedAlgorithm,

    // DER-related errors
    /// ASN.1 encoding failed.
    #[error("DER encoding failed")]
    DerAsn1EncodeError,
    /// ASN.1 decoding failed.
    #[error("DER decoding failed")]
    DerAsn1DecodeError,
    /// OID does not name a supported digest algorithm.
    #[error("DER unsupported OID")]
    DerInvalidOid,
    /// Digest length does not match its algorithm.
    #[error("DER invalid digest size")]
    DerInvalidDigestSize,

    // ECDSA signature value errors
    /// Concatenated r||s input has an invalid length.
    #[error("ECDSA invalid raw signature size")]
    EcdsaInvalidRawSignatureSize,
    /// r or s does not fit in the requested field width.
    #[error("ECDSA signature component too large for field width")]
    EcdsaComponentTooLarge,
    /// r or s is negative.
    #[error("ECDSA signature component is negative")]
    EcdsaNegativeComponent,
    /// Key length is not one of the supported ECDSA key lengths.
    #[error("ECDSA unsupported key length: {0} bits")]
    EcdsaUnsupportedKeyLength(usize),

    // RSA-related errors
    /// Generic RSA failure.
    #[error("RSA operation failed")]
    RsaError,
    /// RSA key size is not supported.
    #[error("RSA invalid key size: {0} bits")]
    RsaInvalidKeySize(usize),
    /// RSA key generation failed.
    #[error("RSA key generation failed")]
    RsaKeyGenError,
    /// RSA key import failed.
    #[error("RSA key import failed")]
    RsaKeyImportError,
    /// RSA key export failed.
    #[error("RSA key export failed")]
    RsaKeyExportError,
    /// Input to a raw RSA operation has an invalid length.
    #[error("RSA invalid input size")]
    RsaInvalidInputSize,
    /// Raw RSA private-key operation failed.
    #[error("RSA signing failed")]
    RsaSignError,
    /// RSA verification could not be performed.
    #[error("RSA verification failed")]
    RsaVerifyError,
    /// Setting an RSA context property failed.
    #[error("RSA set property failed")]
    RsaSetPropertyError,

    // ECC-related errors
    /// Generic ECC failure.
    #[error("ECC operation failed")]
    EccError,
    /// Curve is not supported.
    #[error("ECC unsupported curve")]
    EccUnsupportedCurve,
    /// ECC key generation failed.
    #[error("ECC key generation failed")]
    EccKeyGenError,
    /// ECC key import failed.
    #[error("ECC key import failed")]
    EccKeyImportError,
    /// ECC key export failed.
    #[error("ECC key export failed")]
    EccKeyExportError,
    /// Raw ECDSA signing failed.
    #[error("ECDSA signing failed")]
    EccSignError,
    /// ECDSA verification could not be performed.
    #[error("ECDSA verification failed")]
    EccVerifyError,

    // Key-related errors
    /// Key type name is neither RSA nor EC.
    #[error("unsupported key family: {0}")]
    KeyUnsupportedFamily(String),

    // RNG-related errors
    /// Random number generation failed.
    #[error("RNG operation failed")]
    RngError,
}
