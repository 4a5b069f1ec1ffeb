// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA keys and raw RSA operations.
//!
//! The signing strategies own all message encoding (PKCS#1 v1.5
//! `DigestInfo`, EMSA-PSS). This module only provides the private-key
//! primitive that consumes the encoded block, plus the verification
//! counterparts used for self-tests.

mod key_ossl;
mod raw_ossl;

pub use key_ossl::*;
pub use raw_ossl::*;

use super::*;

/// Smallest RSA modulus accepted for generation and import.
pub const RSA_MIN_KEY_BITS: usize = 1024;

/// Largest RSA modulus accepted for generation and import.
pub const RSA_MAX_KEY_BITS: usize = 8192;

/// Whether `bits` is an RSA modulus size this provider works with.
pub fn is_valid_rsa_key_size(bits: usize) -> bool {
    (RSA_MIN_KEY_BITS..=RSA_MAX_KEY_BITS).contains(&bits) && bits.is_multiple_of(8)
}

#[cfg(test)]
mod tests;
