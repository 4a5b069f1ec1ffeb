// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-backed RSA key pairs.
//!
//! Keys are imported and exported in DER encoding:
//! - Private keys: PKCS#8
//! - Public keys: X.509 SubjectPublicKeyInfo

use openssl::pkey::*;
use openssl::rsa::Rsa;

use super::*;

#[derive(Clone, Debug)]
pub struct RsaPrivateKey {
    key: PKey<Private>,
}

#[derive(Clone, Debug)]
pub struct RsaPublicKey {
    key: PKey<Public>,
}

impl RsaPrivateKey {
    /// Generates a fresh key with a modulus of `bits` bits and exponent 65537.
    pub fn generate(bits: usize) -> Result<Self, CryptoError> {
        if !is_valid_rsa_key_size(bits) {
            tracing::error!(bits, "unsupported RSA key size");
            return Err(CryptoError::RsaInvalidKeySize(bits));
        }

        let rsa = Rsa::generate(bits as u32).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, bits, "RSA key generation failed");
            CryptoError::RsaKeyGenError
        })?;
        let key = PKey::from_rsa(rsa).map_err(|_| CryptoError::RsaError)?;
        Ok(Self { key })
    }

    /// Imports a PKCS#8 DER private key.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key = PKey::private_key_from_der(der).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, "RSA private key import failed");
            CryptoError::RsaKeyImportError
        })?;
        if key.id() != Id::RSA {
            tracing::error!(id = ?key.id(), "imported key is not an RSA key");
            return Err(CryptoError::RsaKeyImportError);
        }
        Ok(Self { key })
    }

    /// Exports the key as PKCS#8 DER.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        self.key
            .private_key_to_pkcs8()
            .map_err(|_| CryptoError::RsaKeyExportError)
    }

    /// Modulus length in bits.
    pub fn bits(&self) -> usize {
        self.key.bits() as usize
    }

    /// Modulus length in bytes; also the length of every signature.
    pub fn size(&self) -> usize {
        self.key.size()
    }

    pub fn public_key(&self) -> Result<RsaPublicKey, CryptoError> {
        let rsa = self.key.rsa().map_err(|_| CryptoError::RsaError)?;
        let n = rsa.n().to_owned().map_err(|_| CryptoError::RsaError)?;
        let e = rsa.e().to_owned().map_err(|_| CryptoError::RsaError)?;
        let public = Rsa::from_public_components(n, e).map_err(|_| CryptoError::RsaError)?;
        let key = PKey::from_rsa(public).map_err(|_| CryptoError::RsaError)?;
        Ok(RsaPublicKey { key })
    }

    pub(crate) fn pkey(&self) -> &PKeyRef<Private> {
        &self.key
    }
}

impl RsaPublicKey {
    /// Imports an X.509 SubjectPublicKeyInfo DER public key.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key = PKey::public_key_from_der(der).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, "RSA public key import failed");
            CryptoError::RsaKeyImportError
        })?;
        if key.id() != Id::RSA {
            return Err(CryptoError::RsaKeyImportError);
        }
        Ok(Self { key })
    }

    /// Exports the key as SubjectPublicKeyInfo DER.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        self.key
            .public_key_to_der()
            .map_err(|_| CryptoError::RsaKeyExportError)
    }

    pub fn bits(&self) -> usize {
        self.key.bits() as usize
    }

    pub fn size(&self) -> usize {
        self.key.size()
    }

    pub(crate) fn pkey(&self) -> &PKeyRef<Public> {
        &self.key
    }
}
