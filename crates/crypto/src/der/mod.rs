// Copyright (C) Microsoft Corporation. All rights reserved.

//! DER structures used around the raw signing primitives.
//!
//! - [`DerDigestInfo`]: PKCS#1 `DigestInfo` fed to the RSA PKCS#1 v1.5 primitive
//! - [`EcdsaSigValue`]: `ECDSA-Sig-Value` in its DER and fixed-width (XML-DSig) forms

mod digest;
mod ecdsa;

pub use digest::*;
pub use ecdsa::*;

use super::*;

#[cfg(test)]
mod tests;
