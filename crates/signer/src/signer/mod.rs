// Copyright (C) Microsoft Corporation. All rights reserved.

//! The signing strategies and the closed set that dispatches between them.

mod ecdsa;
mod rsa_pkcs1;
mod rsa_pss;

use std::fmt;

pub use ecdsa::*;
pub use rsa_pkcs1::*;
pub use rsa_pss::*;
use signservice_crypto::PrivateKey;

use super::*;

/// Identifies a signing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignerKind {
    /// RSA PKCS#1 v1.5
    RsaPkcs1,
    /// RSASSA-PSS
    RsaPss,
    /// ECDSA
    Ecdsa,
}

impl fmt::Display for SignerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignerKind::RsaPkcs1 => "RSA PKCS#1 v1.5",
            SignerKind::RsaPss => "RSA-PSS",
            SignerKind::Ecdsa => "ECDSA",
        })
    }
}

/// A resolved signing strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signer {
    /// RSA PKCS#1 v1.5 signer
    RsaPkcs1(RsaPkcs1Signer),
    /// RSA-PSS signer
    RsaPss(RsaPssSigner),
    /// ECDSA signer bound to a container type
    Ecdsa(EcdsaSigner),
}

impl Signer {
    /// Which strategy this is.
    pub fn kind(&self) -> SignerKind {
        match self {
            Signer::RsaPkcs1(_) => SignerKind::RsaPkcs1,
            Signer::RsaPss(_) => SignerKind::RsaPss,
            Signer::Ecdsa(_) => SignerKind::Ecdsa,
        }
    }

    /// Signs `tbs` with `key` under `algorithm`.
    pub fn sign(
        &self,
        tbs: &[u8],
        key: &PrivateKey,
        algorithm: &AlgorithmDescriptor,
    ) -> SignResult<Vec<u8>> {
        match self {
            Signer::RsaPkcs1(signer) => signer.sign(tbs, key, algorithm),
            Signer::RsaPss(signer) => signer.sign(tbs, key, algorithm),
            Signer::Ecdsa(signer) => signer.sign(tbs, key, algorithm),
        }
    }
}

fn wrong_algorithm_kind(signer: SignerKind, algorithm: &AlgorithmDescriptor) -> SignError {
    tracing::error!(%signer, algorithm = algorithm.uri(), "signer invoked with wrong algorithm kind");
    SignError::WrongAlgorithmKind {
        signer,
        algorithm: algorithm.uri().to_string(),
    }
}

fn key_mismatch(signer: SignerKind, expected: KeyFamily, key: &PrivateKey) -> SignError {
    tracing::error!(%signer, %expected, actual = %key.family(), "signer invoked with wrong key family");
    SignError::KeyMismatch {
        signer,
        expected,
        actual: key.family(),
    }
}

#[cfg(test)]
mod tests;
