// Copyright (C) Microsoft Corporation. All rights reserved.

//! Cryptographically secure random bytes from OpenSSL's DRBG.

use super::*;

/// Fills `buf` with random bytes.
pub fn rand_bytes(buf: &mut [u8]) -> Result<(), CryptoError> {
    openssl::rand::rand_bytes(buf).map_err(|openssl_error_stack| {
        tracing::error!(?openssl_error_stack, "random byte generation failed");
        CryptoError::RngError
    })
}

/// Salt source handed to the PSS padding engine.
pub fn padding_rng(buf: &mut [u8]) -> Result<(), ()> {
    rand_bytes(buf).map_err(|_| ())
}
