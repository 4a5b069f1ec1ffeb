// Copyright (C) Microsoft Corporation. All rights reserved.

//! Generated key pairs and the parameters they are generated from.

use std::fmt;

use signservice_crypto::EccCurve;
use signservice_crypto::KeyFamily;
use signservice_crypto::PrivateKey;
use signservice_crypto::PublicKey;

/// Family and size of the keys a provider hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyParams {
    /// RSA with the given modulus size in bits.
    Rsa {
        /// Modulus size in bits
        bits: usize,
    },

    /// EC on the given curve.
    Ec(EccCurve),
}

impl KeyParams {
    /// Key family of the parameters.
    pub fn family(&self) -> KeyFamily {
        match self {
            KeyParams::Rsa { .. } => KeyFamily::Rsa,
            KeyParams::Ec(_) => KeyFamily::Ec,
        }
    }
}

impl fmt::Display for KeyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParams::Rsa { bits } => write!(f, "RSA-{bits}"),
            KeyParams::Ec(curve) => write!(f, "EC {curve}"),
        }
    }
}

/// An owned key pair.
///
/// Once handed out by a provider the credential belongs to the caller; the
/// pool keeps no reference to it.
#[derive(Debug)]
pub struct KeyCredential {
    private: PrivateKey,
    public: PublicKey,
    params: KeyParams,
}

impl KeyCredential {
    pub(crate) fn new(private: PrivateKey, public: PublicKey, params: KeyParams) -> Self {
        Self {
            private,
            public,
            params,
        }
    }

    /// Private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Parameters the pair was generated with.
    pub fn params(&self) -> KeyParams {
        self.params
    }

    /// Key family of the pair.
    pub fn family(&self) -> KeyFamily {
        self.params.family()
    }

    /// Splits the credential into its private and public halves.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
