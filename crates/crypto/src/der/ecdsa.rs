// Copyright (C) Microsoft Corporation. All rights reserved.

//! The ECDSA signature value and its two wire forms.
//!
//! CMS and PDF signatures carry the DER structure
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```
//!
//! while XML-DSig carries `r || s`, each left-padded with zeros to the byte
//! length of the curve order.

use super::*;

#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct EcdsaSig<'a> {
    r: asn1::BigInt<'a>,
    s: asn1::BigInt<'a>,
}

/// An ECDSA `(r, s)` pair held as minimal unsigned big-endian integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaSigValue {
    r: Vec<u8>,
    s: Vec<u8>,
}

impl EcdsaSigValue {
    /// Key lengths (bits) for which a fixed-width encoding is defined.
    pub const SUPPORTED_KEY_LENGTHS: [usize; 5] = [160, 224, 256, 384, 521];

    /// Builds a value from unsigned big-endian `r` and `s`.
    pub fn new(r: &[u8], s: &[u8]) -> Self {
        Self {
            r: strip_leading_zeros(r).to_vec(),
            s: strip_leading_zeros(s).to_vec(),
        }
    }

    /// Splits a fixed-width `r || s` encoding into its halves.
    pub fn from_fixed_width(raw: &[u8]) -> Result<Self, CryptoError> {
        if raw.is_empty() || !raw.len().is_multiple_of(2) {
            tracing::error!(len = raw.len(), "raw ECDSA signature must have even length");
            return Err(CryptoError::EcdsaInvalidRawSignatureSize);
        }
        let (r, s) = raw.split_at(raw.len() / 2);
        Ok(Self::new(r, s))
    }

    /// Parses the DER `ECDSA-Sig-Value` structure.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let sig = asn1::parse_single::<EcdsaSig<'_>>(der).map_err(|error| {
            tracing::error!(?error, "failed to parse ECDSA-Sig-Value");
            CryptoError::DerAsn1DecodeError
        })?;
        if sig.r.is_negative() || sig.s.is_negative() {
            tracing::error!("ECDSA-Sig-Value holds a negative integer");
            return Err(CryptoError::EcdsaNegativeComponent);
        }

        Ok(Self::new(sig.r.as_bytes(), sig.s.as_bytes()))
    }

    pub fn r(&self) -> &[u8] {
        &self.r
    }

    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// Encodes as DER `SEQUENCE { INTEGER r, INTEGER s }`.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        let r = der_integer_bytes(&self.r);
        let s = der_integer_bytes(&self.s);
        let sig = EcdsaSig {
            r: asn1::BigInt::new(&r).ok_or(CryptoError::DerAsn1EncodeError)?,
            s: asn1::BigInt::new(&s).ok_or(CryptoError::DerAsn1EncodeError)?,
        };

        asn1::write_single(&sig).map_err(|error| {
            tracing::error!(?error, "failed to encode ECDSA-Sig-Value");
            CryptoError::DerAsn1EncodeError
        })
    }

    /// Encodes as `r || s` for a key of `key_bits` bits, each component
    /// zero-padded to `ceil(key_bits / 8)` bytes.
    pub fn to_fixed_width(&self, key_bits: usize) -> Result<Vec<u8>, CryptoError> {
        if !Self::SUPPORTED_KEY_LENGTHS.contains(&key_bits) {
            tracing::error!(key_bits, "unsupported ECDSA key length");
            return Err(CryptoError::EcdsaUnsupportedKeyLength(key_bits));
        }

        let field_size = key_bits.div_ceil(8);
        if self.r.len() > field_size || self.s.len() > field_size {
            tracing::error!(field_size, "ECDSA signature component exceeds field size");
            return Err(CryptoError::EcdsaComponentTooLarge);
        }

        let mut raw = vec![0u8; 2 * field_size];
        raw[field_size - self.r.len()..field_size].copy_from_slice(&self.r);
        raw[2 * field_size - self.s.len()..].copy_from_slice(&self.s);
        Ok(raw)
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(bytes.len());
    &bytes[start..]
}

// Minimal two's complement encoding of a non-negative integer.
fn der_integer_bytes(unsigned: &[u8]) -> Vec<u8> {
    match unsigned.first() {
        None => vec![0],
        Some(&first) if first & 0x80 != 0 => {
            let mut bytes = Vec::with_capacity(unsigned.len() + 1);
            bytes.push(0);
            bytes.extend_from_slice(unsigned);
            bytes
        }
        Some(_) => unsigned.to_vec(),
    }
}
