// Copyright (C) Microsoft Corporation. All rights reserved.

//! ECDSA signatures with container-specific value encoding.
//!
//! | container  | signature value                                   |
//! |------------|---------------------------------------------------|
//! | XML        | `r \|\| s`, each zero-padded to the curve order size |
//! | PDF, CMS   | DER `SEQUENCE { INTEGER r, INTEGER s }`           |

use signservice_crypto::ecdsa_sign_digest;

use super::*;

/// Signer for ECDSA algorithms, bound to one container type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSigner {
    container: SignatureContainerType,
}

enum SigValueEncoding {
    FixedWidth,
    Der,
}

impl EcdsaSigner {
    /// Signer producing values for `container`.
    pub fn new(container: SignatureContainerType) -> Self {
        Self { container }
    }

    /// Container type the signature value is encoded for.
    pub fn container(&self) -> SignatureContainerType {
        self.container
    }

    /// Signs `tbs` and encodes `(r, s)` for the bound container.
    ///
    /// # Errors
    ///
    /// * [`SignError::WrongAlgorithmKind`] if `algorithm` is not an ECDSA
    ///   algorithm.
    /// * [`SignError::KeyMismatch`] if `key` is not an EC key.
    /// * [`SignError::UnsupportedContainerType`] for containers without an
    ///   ECDSA encoding.
    /// * [`SignError::Crypto`] if hashing, signing or encoding fails.
    pub fn sign(
        &self,
        tbs: &[u8],
        key: &PrivateKey,
        algorithm: &AlgorithmDescriptor,
    ) -> SignResult<Vec<u8>> {
        if algorithm.key_family() != Some(KeyFamily::Ec) {
            return Err(wrong_algorithm_kind(SignerKind::Ecdsa, algorithm));
        }
        let PrivateKey::Ecc(ec_key) = key else {
            return Err(key_mismatch(SignerKind::Ecdsa, KeyFamily::Ec, key));
        };
        let encoding = self.encoding()?;

        let digest = algorithm.digest().hash(tbs)?;
        let sig_value = ecdsa_sign_digest(ec_key, &digest)?;
        let signature = match encoding {
            SigValueEncoding::FixedWidth => {
                sig_value.to_fixed_width(ec_key.curve().order_bits())?
            }
            SigValueEncoding::Der => sig_value.to_der()?,
        };

        tracing::debug!(
            algorithm = algorithm.uri(),
            container = %self.container,
            len = signature.len(),
            "created ECDSA signature"
        );
        Ok(signature)
    }

    fn encoding(&self) -> SignResult<SigValueEncoding> {
        match self.container {
            SignatureContainerType::Xml => Ok(SigValueEncoding::FixedWidth),
            SignatureContainerType::Pdf | SignatureContainerType::Cms => Ok(SigValueEncoding::Der),
            SignatureContainerType::Json => {
                tracing::error!(container = %self.container, "no ECDSA signature encoding for container");
                Err(SignError::UnsupportedContainerType(self.container))
            }
        }
    }
}
