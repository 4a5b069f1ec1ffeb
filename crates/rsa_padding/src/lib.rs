// Copyright (C) Microsoft Corporation. All rights reserved.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Probabilistic Signature Scheme (PSS) encoding for RSA signatures.
//!
//! Implements EMSA-PSS from PKCS#1 v2.1 (RFC 8017 Section 9.1) on top of an
//! abstract digest primitive, together with the MGF1 mask generation
//! function it relies on. The engine produces the full-width encoded
//! message (EM) that is handed to a raw RSA private-key operation; it never
//! touches key material itself.
//!
//! Digest algorithms supported - SHA1, SHA2-256, SHA2-384, SHA2-512

mod mgf;
mod pss;

pub use mgf::mgf1;
pub use pss::*;
use thiserror::Error;

/// Digest algorithm used internally by the padding scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RsaDigestKind {
    /// SHA1
    Sha1,

    /// SHA256
    Sha256,

    /// SHA384
    Sha384,

    /// SHA512
    Sha512,
}

impl RsaDigestKind {
    /// Output length of the digest in bytes.
    pub fn hash_len(&self) -> usize {
        match self {
            RsaDigestKind::Sha1 => 20,
            RsaDigestKind::Sha256 => 32,
            RsaDigestKind::Sha384 => 48,
            RsaDigestKind::Sha512 => 64,
        }
    }
}

/// Error type enum for RSA padding functions
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RsaError {
    /// Invalid parameter
    #[error("invalid parameter")]
    InvalidParameter,

    /// Modulus is too small for the selected digest and salt lengths
    #[error("key too small for specified hash and salt lengths: {modulus_bits} bits, at least {required_bits} required")]
    KeyTooSmall {
        /// Modulus bit length that was requested
        modulus_bits: usize,
        /// Smallest modulus bit length that would have been accepted
        required_bits: usize,
    },

    /// Explicit salt does not match the configured salt length
    #[error("salt length mismatch: expected {expected} bytes, got {actual}")]
    SaltLengthMismatch {
        /// Configured salt length
        expected: usize,
        /// Length of the supplied salt
        actual: usize,
    },

    /// The digest primitive failed or returned an unexpected length
    #[error("digest failure")]
    DigestFailure,

    /// Random salt generation failed
    #[error("RNG failure")]
    RngFailure,
}

/// Result type for RSA padding functions
pub type RsaResult<T> = Result<T, RsaError>;

/// Digest primitive consumed by the padding engine.
///
/// Implementations must return exactly [`RsaDigestKind::hash_len`] bytes for
/// the requested algorithm.
pub type HashFn = fn(RsaDigestKind, &[u8]) -> RsaResult<Vec<u8>>;

/// Random byte source used to draw fresh salts.
pub type RngFn = fn(&mut [u8]) -> Result<(), ()>;
