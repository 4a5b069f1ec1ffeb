// Copyright (C) Microsoft Corporation. All rights reserved.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Signature construction for the signature service.
//!
//! A caller resolves an algorithm URI and a container type to a [`Signer`]
//! through the [`SignerProvider`], then signs the to-be-signed bytes with a
//! private key. Three strategies exist:
//!
//! - RSA PKCS#1 v1.5: `DigestInfo` fed to the raw PKCS#1 primitive
//! - RSA-PSS: EMSA-PSS encoded message fed to raw RSA without padding
//! - ECDSA: `(r, s)` encoded as fixed-width `r || s` for XML, DER for PDF/CMS
//!
//! Signers hold no mutable state and may be shared freely between threads.

mod algorithm;
mod container;
mod provider;
mod signer;

pub use algorithm::*;
pub use container::*;
pub use provider::*;
use rsa_padding::RsaError;
pub use signer::*;
use signservice_crypto::CryptoError;
use signservice_crypto::KeyFamily;
use thiserror::Error;

/// Errors raised while resolving or running a signer.
///
/// Every variant except [`SignError::UnsupportedAlgorithm`] is a signature
/// error: the request named a usable algorithm but the signature could not be
/// produced. None of them are retryable by the signer itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignError {
    /// The algorithm URI is unknown or does not name a signature algorithm.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A signer was invoked with an algorithm of a different kind.
    #[error("{signer} signer cannot produce {algorithm} signatures")]
    WrongAlgorithmKind {
        /// Strategy that rejected the algorithm
        signer: SignerKind,
        /// URI of the rejected algorithm
        algorithm: String,
    },

    /// The ECDSA signer has no signature-value encoding for the container.
    #[error("unsupported signature container type: {0}")]
    UnsupportedContainerType(SignatureContainerType),

    /// The private key belongs to the wrong family for the signer.
    #[error("{signer} signer requires an {expected} key, got {actual}")]
    KeyMismatch {
        /// Strategy that rejected the key
        signer: SignerKind,
        /// Family the signer needs
        expected: KeyFamily,
        /// Family of the supplied key
        actual: KeyFamily,
    },

    /// The digest or raw signing primitive failed.
    #[error("signature error: {0}")]
    Crypto(#[from] CryptoError),

    /// PSS parameters or encoding failed.
    #[error("signature padding error: {0}")]
    Padding(#[from] RsaError),
}

impl SignError {
    /// Whether this failure happened while producing a signature, as opposed
    /// to resolving the algorithm.
    pub fn is_signature_error(&self) -> bool {
        !matches!(self, SignError::UnsupportedAlgorithm(_))
    }
}

/// Result type for signer operations.
pub type SignResult<T> = Result<T, SignError>;
