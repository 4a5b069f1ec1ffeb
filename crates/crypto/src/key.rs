// Copyright (C) Microsoft Corporation. All rights reserved.

//! Family-agnostic key handles.

use std::fmt;
use std::str::FromStr;

use super::*;

/// Asymmetric key family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// RSA
    Rsa,
    /// Elliptic curve
    Ec,
}

impl KeyFamily {
    /// Conventional key type name ("RSA" or "EC").
    pub fn name(&self) -> &'static str {
        match self {
            KeyFamily::Rsa => "RSA",
            KeyFamily::Ec => "EC",
        }
    }
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyFamily {
    type Err = CryptoError;

    /// Parses "RSA" or "EC", ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("RSA") {
            Ok(KeyFamily::Rsa)
        } else if s.eq_ignore_ascii_case("EC") {
            Ok(KeyFamily::Ec)
        } else {
            tracing::error!(key_type = s, "unsupported key family");
            Err(CryptoError::KeyUnsupportedFamily(s.to_string()))
        }
    }
}

/// A private key of either family.
#[derive(Debug, Clone)]
pub enum PrivateKey {
    /// RSA private key
    Rsa(RsaPrivateKey),
    /// EC private key
    Ecc(EccPrivateKey),
}

impl PrivateKey {
    /// Key family of the key.
    pub fn family(&self) -> KeyFamily {
        match self {
            PrivateKey::Rsa(_) => KeyFamily::Rsa,
            PrivateKey::Ecc(_) => KeyFamily::Ec,
        }
    }

    /// Modulus length for RSA, group order length for EC, in bits.
    pub fn bits(&self) -> usize {
        match self {
            PrivateKey::Rsa(key) => key.bits(),
            PrivateKey::Ecc(key) => key.bits(),
        }
    }

    /// Public half of the key.
    pub fn public_key(&self) -> Result<PublicKey, CryptoError> {
        match self {
            PrivateKey::Rsa(key) => key.public_key().map(PublicKey::Rsa),
            PrivateKey::Ecc(key) => key.public_key().map(PublicKey::Ecc),
        }
    }

    /// PKCS#8 DER encoding.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        match self {
            PrivateKey::Rsa(key) => key.to_der(),
            PrivateKey::Ecc(key) => key.to_der(),
        }
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        PrivateKey::Rsa(key)
    }
}

impl From<EccPrivateKey> for PrivateKey {
    fn from(key: EccPrivateKey) -> Self {
        PrivateKey::Ecc(key)
    }
}

/// A public key of either family.
#[derive(Debug, Clone)]
pub enum PublicKey {
    /// RSA public key
    Rsa(RsaPublicKey),
    /// EC public key
    Ecc(EccPublicKey),
}

impl PublicKey {
    /// Key family of the key.
    pub fn family(&self) -> KeyFamily {
        match self {
            PublicKey::Rsa(_) => KeyFamily::Rsa,
            PublicKey::Ecc(_) => KeyFamily::Ec,
        }
    }

    /// Key size in bits.
    pub fn bits(&self) -> usize {
        match self {
            PublicKey::Rsa(key) => key.bits(),
            PublicKey::Ecc(key) => key.bits(),
        }
    }

    /// SubjectPublicKeyInfo DER encoding.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        match self {
            PublicKey::Rsa(key) => key.to_der(),
            PublicKey::Ecc(key) => key.to_der(),
        }
    }
}
