// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key providers by key type.

use std::str::FromStr;

use lazy_static::lazy_static;
use signservice_crypto::KeyFamily;

use super::*;

/// Supplies key pairs of one family and size.
pub trait KeyProvider: Send + Sync {
    /// Parameters of the supplied keys.
    fn key_params(&self) -> KeyParams;

    /// Returns a fresh key pair owned by the caller.
    fn get_key_pair(&self) -> KeyPoolResult<KeyCredential>;
}

impl KeyProvider for KeyPool {
    fn key_params(&self) -> KeyParams {
        self.params()
    }

    fn get_key_pair(&self) -> KeyPoolResult<KeyCredential> {
        KeyPool::get_key_pair(self)
    }
}

/// Generates every key pair on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnDemandKeyProvider {
    params: KeyParams,
}

impl OnDemandKeyProvider {
    /// Provider generating `params` keys.
    pub fn new(params: KeyParams) -> Self {
        Self { params }
    }
}

impl KeyProvider for OnDemandKeyProvider {
    fn key_params(&self) -> KeyParams {
        self.params
    }

    fn get_key_pair(&self) -> KeyPoolResult<KeyCredential> {
        self.params.generate()
    }
}

/// Key type names accepted by [`SigningKeyProvider::get_signing_key_pair`].
pub const SUPPORTED_KEY_TYPES: [&str; 2] = ["EC", "RSA"];

/// Hands out signing keys by key type name.
///
/// RSA keys come from a [`KeyPool`], or are generated on demand when the
/// configured pool size is zero. EC keys are always generated on demand.
pub struct SigningKeyProvider {
    rsa: Box<dyn KeyProvider>,
    ec: Box<dyn KeyProvider>,
}

impl SigningKeyProvider {
    /// Provider for a validated `config`.
    pub fn new(config: &KeyProviderConfig) -> KeyPoolResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Provider with explicit per-family providers.
    pub fn with_providers(rsa: Box<dyn KeyProvider>, ec: Box<dyn KeyProvider>) -> Self {
        Self { rsa, ec }
    }

    fn build(config: &KeyProviderConfig) -> Self {
        let rsa: Box<dyn KeyProvider> = match config.rsa_pool_size {
            0 => Box::new(OnDemandKeyProvider::new(config.rsa_params())),
            size => Box::new(KeyPool::new(config.rsa_params(), size, config.retry)),
        };
        let ec = Box::new(OnDemandKeyProvider::new(config.ec_params()));

        tracing::info!(
            rsa = %config.rsa_params(),
            rsa_pool_size = config.rsa_pool_size,
            ec = %config.ec_params(),
            "signing key provider ready"
        );
        Self::with_providers(rsa, ec)
    }

    /// Key pair for `key_type` ("RSA" or "EC", case-insensitive).
    ///
    /// # Errors
    ///
    /// * [`KeyPoolError::UnsupportedKeyType`] for any other key type.
    /// * [`KeyPoolError::KeyGeneration`] if a key had to be generated and
    ///   generation failed.
    pub fn get_signing_key_pair(&self, key_type: &str) -> KeyPoolResult<KeyCredential> {
        let family = KeyFamily::from_str(key_type).map_err(|error| {
            tracing::error!(?error, key_type, "unsupported signing key type");
            KeyPoolError::UnsupportedKeyType(key_type.to_string())
        })?;
        self.provider(family).get_key_pair()
    }

    /// Provider serving `family`.
    pub fn provider(&self, family: KeyFamily) -> &dyn KeyProvider {
        match family {
            KeyFamily::Rsa => self.rsa.as_ref(),
            KeyFamily::Ec => self.ec.as_ref(),
        }
    }

    /// Key type names this provider accepts.
    pub fn supported_key_types(&self) -> &'static [&'static str] {
        &SUPPORTED_KEY_TYPES
    }
}

lazy_static! {
    static ref DEFAULT_SIGNING_KEY_PROVIDER: SigningKeyProvider =
        SigningKeyProvider::build(&KeyProviderConfig::default());
}

/// Process-wide provider with the default configuration, created on first
/// use.
pub fn default_signing_key_provider() -> &'static SigningKeyProvider {
    &DEFAULT_SIGNING_KEY_PROVIDER
}
