// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key provider configuration.

use serde::Deserialize;
use serde::Serialize;
use signservice_crypto::is_valid_rsa_key_size;
use signservice_crypto::EccCurve;

use super::*;

/// Default RSA modulus size in bits.
pub const DEFAULT_RSA_KEY_SIZE: usize = 3072;

/// Default number of pre-generated RSA keys.
pub const DEFAULT_RSA_POOL_SIZE: usize = 100;

/// Settings for [`SigningKeyProvider`].
///
/// Every field is optional in the serialized form:
///
/// ```json
/// {
///     "rsa_key_size": 3072,
///     "rsa_pool_size": 100,
///     "ec_curve": "P-256",
///     "retry": { "max_retries": 3, "backoff_base_ms": 100 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyProviderConfig {
    /// RSA modulus size in bits.
    pub rsa_key_size: usize,

    /// Number of RSA keys kept ready. Zero generates every key on demand.
    pub rsa_pool_size: usize,

    /// Curve of EC keys.
    pub ec_curve: EccCurve,

    /// Retry behavior of the RSA pool's background worker.
    pub retry: RetryPolicy,
}

impl Default for KeyProviderConfig {
    fn default() -> Self {
        Self {
            rsa_key_size: DEFAULT_RSA_KEY_SIZE,
            rsa_pool_size: DEFAULT_RSA_POOL_SIZE,
            ec_curve: EccCurve::P256,
            retry: RetryPolicy::default(),
        }
    }
}

impl KeyProviderConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> KeyPoolResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|error| {
            tracing::error!(%error, "failed to parse key provider configuration");
            KeyPoolError::InvalidConfig(error.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured RSA key size can be generated.
    pub fn validate(&self) -> KeyPoolResult<()> {
        if !is_valid_rsa_key_size(self.rsa_key_size) {
            tracing::error!(
                rsa_key_size = self.rsa_key_size,
                "invalid RSA key size in key provider configuration"
            );
            return Err(KeyPoolError::InvalidConfig(format!(
                "unsupported RSA key size {}",
                self.rsa_key_size
            )));
        }
        Ok(())
    }

    pub(crate) fn rsa_params(&self) -> KeyParams {
        KeyParams::Rsa {
            bits: self.rsa_key_size,
        }
    }

    pub(crate) fn ec_params(&self) -> KeyParams {
        KeyParams::Ec(self.ec_curve)
    }
}
