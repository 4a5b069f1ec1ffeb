// Copyright (C) Microsoft Corporation. All rights reserved.

//! DER encoding and decoding of the PKCS#1 `DigestInfo` structure.
//!
//! ```text
//! DigestInfo ::= SEQUENCE {
//!     digestAlgorithm AlgorithmIdentifier,
//!     digest OCTET STRING
//! }
//! ```
//!
//! The algorithm parameters are always encoded as an explicit NULL, which is
//! the form every PKCS#1 v1.5 verifier expects.

use super::*;

pub const OID_SHA1: asn1::ObjectIdentifier = asn1::oid!(1, 3, 14, 3, 2, 26);

pub const OID_SHA256: asn1::ObjectIdentifier = asn1::oid!(2, 16, 840, 1, 101, 3, 4, 2, 1);

pub const OID_SHA384: asn1::ObjectIdentifier = asn1::oid!(2, 16, 840, 1, 101, 3, 4, 2, 2);

pub const OID_SHA512: asn1::ObjectIdentifier = asn1::oid!(2, 16, 840, 1, 101, 3, 4, 2, 3);

#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct AlgorithmIdentifier {
    algorithm: asn1::ObjectIdentifier,
    parameters: Option<asn1::Null>,
}

#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct DigestInfo<'a> {
    algorithm: AlgorithmIdentifier,
    digest: &'a [u8],
}

/// A message digest tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerDigestInfo {
    algo: HashAlgo,
    digest: Vec<u8>,
}

impl DerDigestInfo {
    /// Wraps an existing digest.
    ///
    /// # Errors
    ///
    /// [`CryptoError::DerInvalidDigestSize`] if `digest` does not have the
    /// output length of `algo`.
    pub fn new(algo: HashAlgo, digest: Vec<u8>) -> Result<Self, CryptoError> {
        if algo.size() != digest.len() {
            tracing::error!(
                ?algo,
                len = digest.len(),
                "digest length does not match algorithm"
            );
            return Err(CryptoError::DerInvalidDigestSize);
        }

        Ok(Self { algo, digest })
    }

    /// Hashes `data` with `algo` and wraps the result.
    pub fn compute(algo: HashAlgo, data: &[u8]) -> Result<Self, CryptoError> {
        let digest = algo.hash(data)?;
        Self::new(algo, digest)
    }

    pub fn algo(&self) -> HashAlgo {
        self.algo
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn from_der(input: &[u8]) -> Result<Self, CryptoError> {
        let digest_info: DigestInfo<'_> = asn1::parse_single(input).map_err(|error| {
            tracing::error!(?error, "failed to parse DigestInfo");
            CryptoError::DerAsn1DecodeError
        })?;
        let algo = HashAlgo::try_from(&digest_info.algorithm.algorithm)?;
        Self::new(algo, digest_info.digest.to_vec())
    }

    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        let digest_info = DigestInfo {
            algorithm: AlgorithmIdentifier {
                algorithm: self.algo.into(),
                parameters: Some(()),
            },
            digest: &self.digest,
        };

        asn1::write_single(&digest_info).map_err(|error| {
            tracing::error!(?error, "failed to encode DigestInfo");
            CryptoError::DerAsn1EncodeError
        })
    }
}

impl From<HashAlgo> for asn1::ObjectIdentifier {
    fn from(algo: HashAlgo) -> Self {
        match algo {
            HashAlgo::Sha1 => OID_SHA1,
            HashAlgo::Sha256 => OID_SHA256,
            HashAlgo::Sha384 => OID_SHA384,
            HashAlgo::Sha512 => OID_SHA512,
        }
    }
}

impl TryFrom<&asn1::ObjectIdentifier> for HashAlgo {
    type Error = CryptoError;

    fn try_from(oid: &asn1::ObjectIdentifier) -> Result<Self, Self::Error> {
        if *oid == OID_SHA1 {
            Ok(HashAlgo::Sha1)
        } else if *oid == OID_SHA256 {
            Ok(HashAlgo::Sha256)
        } else if *oid == OID_SHA384 {
            Ok(HashAlgo::Sha384)
        } else if *oid == OID_SHA512 {
            Ok(HashAlgo::Sha512)
        } else {
            tracing::error!(?oid, "unsupported digest algorithm OID");
            Err(CryptoError::DerInvalidOid)
        }
    }
}
