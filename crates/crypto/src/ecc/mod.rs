// Copyright (C) Microsoft Corporation. All rights reserved.

//! Elliptic curve keys and raw ECDSA on the NIST prime curves.
//!
//! # Supported Curves
//!
//! - **P-256** (secp256r1, prime256v1)
//! - **P-384** (secp384r1)
//! - **P-521** (secp521r1)

mod ecdsa;
mod key_ossl;

use std::fmt;
use std::str::FromStr;

pub use ecdsa::*;
pub use key_ossl::*;
use openssl::nid::Nid;
use serde::Deserialize;
use serde::Serialize;

use super::*;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum EccCurve {
    #[serde(rename = "P-256", alias = "secp256r1", alias = "prime256v1")]
    P256,

    #[serde(rename = "P-384", alias = "secp384r1")]
    P384,

    #[serde(rename = "P-521", alias = "secp521r1")]
    P521,
}

impl EccCurve {
    /// Byte length of a field element and of each half of a fixed-width
    /// signature.
    pub fn field_size(&self) -> usize {
        self.order_bits().div_ceil(8)
    }

    /// Bit length of the group order.
    pub fn order_bits(&self) -> usize {
        match self {
            EccCurve::P256 => 256,
            EccCurve::P384 => 384,
            EccCurve::P521 => 521,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EccCurve::P256 => "P-256",
            EccCurve::P384 => "P-384",
            EccCurve::P521 => "P-521",
        }
    }

    pub(crate) fn nid(&self) -> Nid {
        match self {
            EccCurve::P256 => Nid::X9_62_PRIME256V1,
            EccCurve::P384 => Nid::SECP384R1,
            EccCurve::P521 => Nid::SECP521R1,
        }
    }
}

impl TryFrom<Nid> for EccCurve {
    type Error = CryptoError;

    fn try_from(nid: Nid) -> Result<Self, Self::Error> {
        match nid {
            Nid::X9_62_PRIME256V1 => Ok(EccCurve::P256),
            Nid::SECP384R1 => Ok(EccCurve::P384),
            Nid::SECP521R1 => Ok(EccCurve::P521),
            _ => Err(CryptoError::EccUnsupportedCurve),
        }
    }
}

impl fmt::Display for EccCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EccCurve {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p-256" | "p256" | "secp256r1" | "prime256v1" => Ok(EccCurve::P256),
            "p-384" | "p384" | "secp384r1" => Ok(EccCurve::P384),
            "p-521" | "p521" | "secp521r1" => Ok(EccCurve::P521),
            _ => {
                tracing::error!(curve = s, "unsupported curve name");
                Err(CryptoError::EccUnsupportedCurve)
            }
        }
    }
}

#[cfg(test)]
mod tests;
