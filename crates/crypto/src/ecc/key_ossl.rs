// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-backed elliptic curve key pairs.
//!
//! Private keys are imported and exported as PKCS#8 DER, public keys as
//! X.509 SubjectPublicKeyInfo DER.

use openssl::ec::*;
use openssl::pkey::*;

use super::*;

#[derive(Debug, Clone)]
pub struct EccPrivateKey {
    key: PKey<Private>,
    curve: EccCurve,
}

#[derive(Debug, Clone)]
pub struct EccPublicKey {
    key: PKey<Public>,
    curve: EccCurve,
}

impl EccPrivateKey {
    /// Generates a fresh key on `curve`.
    pub fn generate(curve: EccCurve) -> Result<Self, CryptoError> {
        let group = EcGroup::from_curve_name(curve.nid()).map_err(|_| CryptoError::EccError)?;
        let ec_key = EcKey::generate(&group).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, %curve, "EC key generation failed");
            CryptoError::EccKeyGenError
        })?;
        let key = PKey::from_ec_key(ec_key).map_err(|_| CryptoError::EccError)?;
        Ok(Self { key, curve })
    }

    /// Imports a PKCS#8 DER private key.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key = PKey::private_key_from_der(der).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, "EC private key import failed");
            CryptoError::EccKeyImportError
        })?;
        let ec_key = key.ec_key().map_err(|_| CryptoError::EccKeyImportError)?;
        let curve = curve_of(ec_key.group())?;
        Ok(Self { key, curve })
    }

    /// Exports the key as PKCS#8 DER.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        self.key
            .private_key_to_pkcs8()
            .map_err(|_| CryptoError::EccKeyExportError)
    }

    pub fn curve(&self) -> EccCurve {
        self.curve
    }

    pub fn bits(&self) -> usize {
        self.key.bits() as usize
    }

    pub fn public_key(&self) -> Result<EccPublicKey, CryptoError> {
        let ec_key = self.key.ec_key().map_err(|_| CryptoError::EccError)?;
        let public = EcKey::from_public_key(ec_key.group(), ec_key.public_key())
            .map_err(|_| CryptoError::EccError)?;
        let key = PKey::from_ec_key(public).map_err(|_| CryptoError::EccError)?;
        Ok(EccPublicKey {
            key,
            curve: self.curve,
        })
    }

    pub(crate) fn ec_key(&self) -> Result<EcKey<Private>, CryptoError> {
        self.key.ec_key().map_err(|_| CryptoError::EccError)
    }
}

impl EccPublicKey {
    /// Imports an X.509 SubjectPublicKeyInfo DER public key.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key = PKey::public_key_from_der(der).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, "EC public key import failed");
            CryptoError::EccKeyImportError
        })?;
        let ec_key = key.ec_key().map_err(|_| CryptoError::EccKeyImportError)?;
        let curve = curve_of(ec_key.group())?;
        Ok(Self { key, curve })
    }

    /// Exports the key as SubjectPublicKeyInfo DER.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        self.key
            .public_key_to_der()
            .map_err(|_| CryptoError::EccKeyExportError)
    }

    pub fn curve(&self) -> EccCurve {
        self.curve
    }

    pub fn bits(&self) -> usize {
        self.key.bits() as usize
    }

    pub(crate) fn ec_key(&self) -> Result<EcKey<Public>, CryptoError> {
        self.key.ec_key().map_err(|_| CryptoError::EccError)
    }
}

fn curve_of(group: &EcGroupRef) -> Result<EccCurve, CryptoError> {
    group
        .curve_name()
        .ok_or(CryptoError::EccUnsupportedCurve)?
        .try_into()
}
