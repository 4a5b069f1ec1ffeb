// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key pair generation.

use std::time::Instant;

use signservice_crypto::EccPrivateKey;
use signservice_crypto::PrivateKey;
use signservice_crypto::RsaPrivateKey;

use super::*;

/// Source of fresh key pairs for a provider.
pub trait KeyGenerator: Send + Sync + 'static {
    /// Parameters of the generated keys.
    fn params(&self) -> KeyParams;

    /// Generates one key pair.
    fn generate(&self) -> KeyPoolResult<KeyCredential>;
}

impl KeyGenerator for KeyParams {
    fn params(&self) -> KeyParams {
        *self
    }

    fn generate(&self) -> KeyPoolResult<KeyCredential> {
        let start = Instant::now();

        let private = match *self {
            KeyParams::Rsa { bits } => PrivateKey::from(RsaPrivateKey::generate(bits)?),
            KeyParams::Ec(curve) => PrivateKey::from(EccPrivateKey::generate(curve)?),
        };
        let public = private.public_key()?;

        tracing::debug!(
            params = %self,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generated key pair"
        );
        Ok(KeyCredential::new(private, public, *self))
    }
}
