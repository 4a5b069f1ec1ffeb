// Copyright (C) Microsoft Corporation. All rights reserved.

//! EMSA-PSS encoding and verification.

use super::mgf::*;
use super::*;

/// Parameters of a PSS encoding, validated when they are built.
///
/// The modulus must leave room for the digest, the salt and the fixed
/// bytes: `modulus_bits - 1 >= 8 * hLen + 8 * sLen + 9`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PssParameters {
    modulus_bits: usize,
    content_digest: RsaDigestKind,
    mgf_digest: RsaDigestKind,
    salt_len: usize,
    trailer: u8,
}

impl PssParameters {
    /// Trailer byte used when no explicit trailer field is encoded.
    pub const TRAILER_IMPLICIT: u8 = 0xbc;

    /// Parameters with the MGF digest equal to the content digest, a salt as
    /// long as the digest output and the implicit trailer.
    pub fn new(modulus_bits: usize, digest: RsaDigestKind) -> RsaResult<Self> {
        Self::builder(modulus_bits, digest).build()
    }

    /// Start building parameters for a modulus of `modulus_bits` bits.
    pub fn builder(modulus_bits: usize, digest: RsaDigestKind) -> PssParametersBuilder {
        PssParametersBuilder {
            modulus_bits,
            content_digest: digest,
            mgf_digest: None,
            salt_len: None,
            trailer: Self::TRAILER_IMPLICIT,
        }
    }

    /// Bit length of the RSA modulus.
    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Digest applied to the message and to M'.
    pub fn content_digest(&self) -> RsaDigestKind {
        self.content_digest
    }

    /// Digest used by MGF1.
    pub fn mgf_digest(&self) -> RsaDigestKind {
        self.mgf_digest
    }

    /// Salt length in bytes.
    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    /// Final byte of every encoded message.
    pub fn trailer(&self) -> u8 {
        self.trailer
    }

    /// Intended bit length of the encoded message, `modulus_bits - 1`.
    pub fn em_bits(&self) -> usize {
        self.modulus_bits - 1
    }

    /// Length in bytes of the encoded message.
    pub fn em_len(&self) -> usize {
        self.em_bits().div_ceil(8)
    }

    fn db_len(&self) -> usize {
        self.em_len() - self.content_digest.hash_len() - 1
    }
}

/// Builder for [`PssParameters`].
#[derive(Clone, Debug)]
pub struct PssParametersBuilder {
    modulus_bits: usize,
    content_digest: RsaDigestKind,
    mgf_digest: Option<RsaDigestKind>,
    salt_len: Option<usize>,
    trailer: u8,
}

impl PssParametersBuilder {
    /// Use a different digest inside MGF1.
    pub fn mgf_digest(mut self, digest: RsaDigestKind) -> Self {
        self.mgf_digest = Some(digest);
        self
    }

    /// Override the salt length (defaults to the content digest size).
    pub fn salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = Some(salt_len);
        self
    }

    /// Override the trailer byte.
    pub fn trailer(mut self, trailer: u8) -> Self {
        self.trailer = trailer;
        self
    }

    /// Validate and produce the parameters.
    ///
    /// # Errors
    ///
    /// * [`RsaError::KeyTooSmall`] when the modulus cannot hold the digest and
    ///   salt.
    /// * [`RsaError::InvalidParameter`] when the salt length is so large the
    ///   required size is not representable.
    pub fn build(self) -> RsaResult<PssParameters> {
        let h_len = self.content_digest.hash_len();
        let salt_len = self.salt_len.unwrap_or(h_len);
        let Some(min_em_bits) = salt_len
            .checked_add(h_len)
            .and_then(|len| len.checked_mul(8))
            .and_then(|bits| bits.checked_add(9))
        else {
            tracing::error!(salt_len, "PSS salt length out of range");
            return Err(RsaError::InvalidParameter);
        };

        if self.modulus_bits == 0 || self.modulus_bits - 1 < min_em_bits {
            tracing::error!(
                modulus_bits = self.modulus_bits,
                h_len,
                salt_len,
                "key too small for specified hash and salt lengths"
            );
            return Err(RsaError::KeyTooSmall {
                modulus_bits: self.modulus_bits,
                required_bits: min_em_bits + 1,
            });
        }

        Ok(PssParameters {
            modulus_bits: self.modulus_bits,
            content_digest: self.content_digest,
            mgf_digest: self.mgf_digest.unwrap_or(self.content_digest),
            salt_len,
            trailer: self.trailer,
        })
    }
}

#[derive(Clone, Debug)]
enum SaltSource {
    Random(RngFn),
    Explicit(Vec<u8>),
}

/// PSS encoder/verifier bound to one set of parameters.
///
/// Each call is independent; the engine holds no per-message state and can be
/// shared between threads.
#[derive(Clone, Debug)]
pub struct PssPadding {
    params: PssParameters,
    hash_func: HashFn,
    salt: SaltSource,
}

impl PssPadding {
    /// Engine that draws a fresh salt from `rng` for every encoding.
    pub fn new(params: PssParameters, hash_func: HashFn, rng: RngFn) -> Self {
        Self {
            params,
            hash_func,
            salt: SaltSource::Random(rng),
        }
    }

    /// Engine that always uses `salt`.
    ///
    /// Encoding becomes deterministic, and verification checks the encoded
    /// message against this salt instead of the one embedded in DB.
    ///
    /// # Errors
    ///
    /// [`RsaError::SaltLengthMismatch`] if `salt` is not exactly
    /// [`PssParameters::salt_len`] bytes.
    pub fn with_explicit_salt(
        params: PssParameters,
        hash_func: HashFn,
        salt: &[u8],
    ) -> RsaResult<Self> {
        if salt.len() != params.salt_len() {
            tracing::error!(
                expected = params.salt_len(),
                actual = salt.len(),
                "explicit PSS salt has wrong length"
            );
            return Err(RsaError::SaltLengthMismatch {
                expected: params.salt_len(),
                actual: salt.len(),
            });
        }

        Ok(Self {
            params,
            hash_func,
            salt: SaltSource::Explicit(salt.to_vec()),
        })
    }

    /// Parameters this engine was built with.
    pub fn params(&self) -> &PssParameters {
        &self.params
    }

    /// Hash `message` with the content digest and encode it.
    pub fn encode(&self, message: &[u8]) -> RsaResult<Vec<u8>> {
        let m_hash = self.content_hash(message)?;
        self.encode_digest(&m_hash)
    }

    /// Encode an already computed message hash.
    ///
    /// Returns `EM = maskedDB || H || trailer`, [`PssParameters::em_len`]
    /// bytes long.
    pub fn encode_digest(&self, m_hash: &[u8]) -> RsaResult<Vec<u8>> {
        let params = &self.params;
        let h_len = params.content_digest.hash_len();
        let s_len = params.salt_len;
        if m_hash.len() != h_len {
            tracing::error!(
                expected = h_len,
                actual = m_hash.len(),
                "message hash length does not match content digest"
            );
            return Err(RsaError::InvalidParameter);
        }

        let salt = self.salt()?;
        let h = self.m_dash_hash(m_hash, &salt)?;

        let em_len = params.em_len();
        let db_len = params.db_len();
        let mut em = vec![0u8; em_len];

        // DB = PS || 0x01 || salt
        {
            let db = &mut em[..db_len];
            db[db_len - s_len - 1] = 0x01;
            db[db_len - s_len..].copy_from_slice(&salt);

            let db_mask = mgf1(&h, db_len, params.mgf_digest, self.hash_func)?;
            xor_in_place(db, &db_mask);
            zero_leftmost_bits(db, 8 * em_len - params.em_bits());
        }

        em[db_len..em_len - 1].copy_from_slice(&h);
        em[em_len - 1] = params.trailer;

        Ok(em)
    }

    /// Hash `message` and check it against `encoded_message`.
    pub fn verify(&self, message: &[u8], encoded_message: &[u8]) -> RsaResult<bool> {
        let m_hash = self.content_hash(message)?;
        self.verify_digest(&m_hash, encoded_message)
    }

    /// Check an encoded message against an already computed message hash.
    ///
    /// `encoded_message` may be the exact EM or the full modulus-width output
    /// of a raw RSA public operation. A malformed or mismatching EM yields
    /// `Ok(false)`; errors are reserved for digest failures and a wrongly
    /// sized `m_hash`.
    pub fn verify_digest(&self, m_hash: &[u8], encoded_message: &[u8]) -> RsaResult<bool> {
        let params = &self.params;
        let h_len = params.content_digest.hash_len();
        let s_len = params.salt_len;
        if m_hash.len() != h_len {
            tracing::error!(
                expected = h_len,
                actual = m_hash.len(),
                "message hash length does not match content digest"
            );
            return Err(RsaError::InvalidParameter);
        }

        let em_len = params.em_len();
        let db_len = params.db_len();
        let Some(mut block) = Self::align(encoded_message, em_len) else {
            tracing::debug!(len = encoded_message.len(), "encoded message has wrong length");
            return Ok(false);
        };

        if block[em_len - 1] != params.trailer {
            tracing::debug!("trailer byte not found");
            return Ok(false);
        }

        let n_zero_bits = 8 * em_len - params.em_bits();
        let (db, rest) = block.split_at_mut(db_len);
        let h = &rest[..h_len];
        if !leftmost_bits_are_zero(db, n_zero_bits) {
            tracing::debug!("leftmost bits of masked DB are not zero");
            return Ok(false);
        }

        let db_mask = mgf1(h, db_len, params.mgf_digest, self.hash_func)?;
        xor_in_place(db, &db_mask);
        zero_leftmost_bits(db, n_zero_bits);

        let ps_len = db_len - s_len - 1;
        if db[..ps_len].iter().any(|&byte| byte != 0) || db[ps_len] != 0x01 {
            tracing::debug!("invalid DB padding");
            return Ok(false);
        }

        let salt = match &self.salt {
            SaltSource::Explicit(salt) => salt.as_slice(),
            SaltSource::Random(_) => &db[ps_len + 1..],
        };
        let h_dash = self.m_dash_hash(m_hash, salt)?;

        Ok(h == h_dash.as_slice())
    }

    fn content_hash(&self, message: &[u8]) -> RsaResult<Vec<u8>> {
        let kind = self.params.content_digest;
        let digest = (self.hash_func)(kind, message)?;
        if digest.len() != kind.hash_len() {
            tracing::error!(?kind, actual = digest.len(), "digest returned unexpected length");
            return Err(RsaError::DigestFailure);
        }
        Ok(digest)
    }

    fn salt(&self) -> RsaResult<Vec<u8>> {
        match &self.salt {
            SaltSource::Explicit(salt) => Ok(salt.clone()),
            SaltSource::Random(rng) => {
                let mut salt = vec![0u8; self.params.salt_len];
                if !salt.is_empty() {
                    rng(&mut salt).map_err(|()| {
                        tracing::error!("failed to draw PSS salt");
                        RsaError::RngFailure
                    })?;
                }
                Ok(salt)
            }
        }
    }

    // H = Hash(0x00 * 8 || mHash || salt)
    fn m_dash_hash(&self, m_hash: &[u8], salt: &[u8]) -> RsaResult<Vec<u8>> {
        let mut m_dash = Vec::with_capacity(8 + m_hash.len() + salt.len());
        m_dash.extend_from_slice(&[0u8; 8]);
        m_dash.extend_from_slice(m_hash);
        m_dash.extend_from_slice(salt);
        self.content_hash(&m_dash)
    }

    fn align(encoded_message: &[u8], em_len: usize) -> Option<Vec<u8>> {
        use std::cmp::Ordering;

        match encoded_message.len().cmp(&em_len) {
            Ordering::Equal => Some(encoded_message.to_vec()),
            Ordering::Greater => {
                let (prefix, em) = encoded_message.split_at(encoded_message.len() - em_len);
                prefix.iter().all(|&byte| byte == 0).then(|| em.to_vec())
            }
            Ordering::Less => {
                let mut block = vec![0u8; em_len];
                block[em_len - encoded_message.len()..].copy_from_slice(encoded_message);
                Some(block)
            }
        }
    }
}
