// Copyright (C) Microsoft Corporation. All rights reserved.

//! MGF1 mask generation and the bit helpers shared by encode and verify.

use super::*;

/// MGF1 from RFC 8017 Appendix B.2.1.
///
/// Hashes `seed || C` for a 4-byte big-endian counter `C` starting at zero and
/// concatenates the outputs until `length` bytes are available.
///
/// # Errors
///
/// * [`RsaError::InvalidParameter`] if `length` exceeds `2^32 * hLen`.
/// * [`RsaError::DigestFailure`] if the digest primitive fails or returns a
///   block of the wrong size.
pub fn mgf1(
    seed: &[u8],
    length: usize,
    digest_kind: RsaDigestKind,
    hash_func: HashFn,
) -> RsaResult<Vec<u8>> {
    let h_len = digest_kind.hash_len();

    if length as u128 > (1u128 << 32) * h_len as u128 {
        tracing::error!(length, "MGF1 mask too long");
        return Err(RsaError::InvalidParameter);
    }

    let mut mask = Vec::with_capacity(length + h_len);
    let mut block = Vec::with_capacity(seed.len() + 4);
    let mut counter: u32 = 0;
    while mask.len() < length {
        block.clear();
        block.extend_from_slice(seed);
        block.extend_from_slice(&counter.to_be_bytes());

        let digest = hash_func(digest_kind, &block)?;
        if digest.len() != h_len {
            tracing::error!(
                expected = h_len,
                actual = digest.len(),
                "MGF1 digest returned unexpected length"
            );
            return Err(RsaError::DigestFailure);
        }
        mask.extend_from_slice(&digest);
        counter = counter.wrapping_add(1);
    }
    mask.truncate(length);

    Ok(mask)
}

/// Byte-wise xor of `b` into `a`; both slices have the same length.
pub(crate) fn xor_in_place(a: &mut [u8], b: &[u8]) {
    for (a_elem, b_elem) in a.iter_mut().zip(b.iter()) {
        *a_elem ^= *b_elem;
    }
}

pub(crate) fn zero_leftmost_bits(v: &mut [u8], bits: usize) {
    let whole = bits / 8;
    let partial = bits % 8;

    for byte in v.iter_mut().take(whole) {
        *byte = 0;
    }
    if partial != 0 {
        if let Some(byte) = v.get_mut(whole) {
            *byte &= 0xff >> partial;
        }
    }
}

pub(crate) fn leftmost_bits_are_zero(v: &[u8], bits: usize) -> bool {
    let whole = bits / 8;
    let partial = bits % 8;

    if v.iter().take(whole).any(|&byte| byte != 0) {
        return false;
    }
    if partial != 0 {
        let mask = !(0xffu8 >> partial);
        if v.get(whole).is_some_and(|&byte| byte & mask != 0) {
            return false;
        }
    }

    true
}
