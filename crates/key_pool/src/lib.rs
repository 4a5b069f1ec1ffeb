// Copyright (C) Microsoft Corporation. All rights reserved.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Signing key supply for the signature service.
//!
//! A [`KeyPool`] keeps a stack of pre-generated key pairs of one family and
//! size, refilled by at most one background worker at a time. Callers take a
//! [`KeyCredential`] with [`KeyPool::get_key_pair`], which never waits for
//! the worker: an empty pool generates the key on the calling thread.
//!
//! [`SigningKeyProvider`] picks the pooled RSA or on-demand EC provider by
//! key type name, configured through [`KeyProviderConfig`].

mod config;
mod credential;
mod generator;
mod pool;
mod provider;
mod resiliency;

pub use config::*;
pub use credential::*;
pub use generator::*;
pub use pool::*;
pub use provider::*;
pub use resiliency::RetryPolicy;
use signservice_crypto::CryptoError;
use thiserror::Error;

/// Key pool and key provider errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyPoolError {
    /// Generating a key pair failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] CryptoError),

    /// No provider exists for the requested key type.
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// The provider configuration is malformed or out of range.
    #[error("invalid key provider configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for key pool operations.
pub type KeyPoolResult<T> = Result<T, KeyPoolError>;
