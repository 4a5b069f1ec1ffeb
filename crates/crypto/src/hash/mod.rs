// Copyright (C) Microsoft Corporation. All rights reserved.

//! Message digests used by the signing strategies.
//!
//! # Supported Hash Functions
//!
//! - **SHA-1**: 160-bit hash (legacy, kept for XML-DSig `rsa-sha1`/`ecdsa-sha1`)
//! - **SHA-256**, **SHA-384**, **SHA-512**: SHA-2 family
//!
//! Digests are computed one-shot with OpenSSL's `EVP_Digest`.

use openssl::hash::MessageDigest;
use rsa_padding::RsaDigestKind;
use rsa_padding::RsaError;
use rsa_padding::RsaResult;

use super::*;

/// Supported message digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgo {
    /// SHA-1
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgo {
    /// Digest output length in bytes.
    pub fn size(&self) -> usize {
        match self {
            HashAlgo::Sha1 => 20,
            HashAlgo::Sha256 => 32,
            HashAlgo::Sha384 => 48,
            HashAlgo::Sha512 => 64,
        }
    }

    /// Hashes `data` in one shot.
    pub fn hash(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        openssl::hash::hash(self.md(), data)
            .map(|digest| digest.to_vec())
            .map_err(|openssl_error_stack| {
                tracing::error!(?openssl_error_stack, algo = ?self, "digest computation failed");
                CryptoError::HashError
            })
    }

    pub(crate) fn md(&self) -> MessageDigest {
        match self {
            HashAlgo::Sha1 => MessageDigest::sha1(),
            HashAlgo::Sha256 => MessageDigest::sha256(),
            HashAlgo::Sha384 => MessageDigest::sha384(),
            HashAlgo::Sha512 => MessageDigest::sha512(),
        }
    }
}

impl From<HashAlgo> for RsaDigestKind {
    fn from(algo: HashAlgo) -> Self {
        match algo {
            HashAlgo::Sha1 => RsaDigestKind::Sha1,
            HashAlgo::Sha256 => RsaDigestKind::Sha256,
            HashAlgo::Sha384 => RsaDigestKind::Sha384,
            HashAlgo::Sha512 => RsaDigestKind::Sha512,
        }
    }
}

impl From<RsaDigestKind> for HashAlgo {
    fn from(kind: RsaDigestKind) -> Self {
        match kind {
            RsaDigestKind::Sha1 => HashAlgo::Sha1,
            RsaDigestKind::Sha256 => HashAlgo::Sha256,
            RsaDigestKind::Sha384 => HashAlgo::Sha384,
            RsaDigestKind::Sha512 => HashAlgo::Sha512,
        }
    }
}

/// Digest primitive handed to the PSS padding engine.
pub fn padding_hash(kind: RsaDigestKind, data: &[u8]) -> RsaResult<Vec<u8>> {
    HashAlgo::from(kind)
        .hash(data)
        .map_err(|_| RsaError::DigestFailure)
}

#[cfg(test)]
mod tests;
