// Copyright (C) Microsoft Corporation. All rights reserved.

//! Resolution of an algorithm URI and container type to a [`Signer`].

use super::*;

/// Selects the signing strategy for an algorithm.
///
/// Resolution consults the registry once and then decides, in order:
///
/// 1. RSASSA-PSS algorithms resolve to [`Signer::RsaPss`].
/// 2. EC algorithms resolve to [`Signer::Ecdsa`] bound to the container.
/// 3. Remaining RSA algorithms resolve to [`Signer::RsaPkcs1`].
///
/// Unknown URIs and URIs naming anything other than a signature algorithm
/// fail with [`SignError::UnsupportedAlgorithm`].
#[derive(Clone, Copy)]
pub struct SignerProvider<'a> {
    registry: &'a dyn AlgorithmRegistry,
}

impl Default for SignerProvider<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl SignerProvider<'static> {
    /// Provider backed by the built-in algorithm registry.
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
        }
    }
}

impl<'a> SignerProvider<'a> {
    /// Provider backed by a caller-supplied registry.
    pub fn with_registry(registry: &'a dyn AlgorithmRegistry) -> Self {
        Self { registry }
    }

    /// Signature algorithm descriptor registered for `uri`.
    pub fn descriptor(&self, uri: &str) -> SignResult<&'a AlgorithmDescriptor> {
        match self.registry.get(uri) {
            Some(descriptor) if descriptor.is_signature() => Ok(descriptor),
            Some(_) => {
                tracing::error!(uri, "algorithm is not a signature algorithm");
                Err(SignError::UnsupportedAlgorithm(uri.to_string()))
            }
            None => {
                tracing::error!(uri, "unknown algorithm");
                Err(SignError::UnsupportedAlgorithm(uri.to_string()))
            }
        }
    }

    /// Signer for `uri`, encoding signature values for `container`.
    pub fn resolve(&self, uri: &str, container: SignatureContainerType) -> SignResult<Signer> {
        let descriptor = self.descriptor(uri)?;

        let signer = match descriptor.kind() {
            AlgorithmKind::Signature { pss: true, .. } => Signer::RsaPss(RsaPssSigner),
            AlgorithmKind::Signature {
                key_family: KeyFamily::Ec,
                ..
            } => Signer::Ecdsa(EcdsaSigner::new(container)),
            AlgorithmKind::Signature {
                key_family: KeyFamily::Rsa,
                ..
            } => Signer::RsaPkcs1(RsaPkcs1Signer),
            AlgorithmKind::MessageDigest => {
                return Err(SignError::UnsupportedAlgorithm(uri.to_string()))
            }
        };

        tracing::debug!(uri, %container, kind = %signer.kind(), "resolved signer");
        Ok(signer)
    }
}
