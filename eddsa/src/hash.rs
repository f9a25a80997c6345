//! Hashing: the pluggable Fiat-Shamir hasher and the fixed internal hash.

use std::io;

use blake2::Blake2b512;
use curve::{BigUint, FIELD_SIZE, Group};
use digest::{Digest, FixedOutputReset};
use zeroize::Zeroizing;

use crate::constants::EXPANDED_SIZE;
use crate::errors::EddsaError;

/// Hash function used for the Fiat-Shamir challenge.
///
/// The scheme resets the hasher, streams the challenge input into it and
/// reads the digest back. A single instance must not be shared between
/// concurrent signing or verification calls.
///
/// Every RustCrypto hasher (`sha2::Sha256`, `blake2::Blake2b512`, ...)
/// implements this trait through the blanket implementation below.
pub trait ChallengeHasher {
    /// Discards any buffered input.
    fn reset(&mut self);

    /// Absorbs `data`.
    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// Returns the digest of everything written since the last reset.
    fn sum(&mut self) -> Vec<u8>;
}

impl<D> ChallengeHasher for D
where
    D: Digest + FixedOutputReset,
{
    fn reset(&mut self) {
        Digest::reset(self);
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        Digest::update(self, data);
        Ok(())
    }

    fn sum(&mut self) -> Vec<u8> {
        Digest::finalize_reset(self).to_vec()
    }
}

/// Blake2b-512 over the concatenation of `parts`.
///
/// This is the hash behind seed expansion and blinding factors. It is part of
/// the key format: replacing it changes every derived key.
pub(crate) fn expand(parts: &[&[u8]]) -> Zeroizing<[u8; EXPANDED_SIZE]> {
    let mut hasher = Blake2b512::new();
    for part in parts {
        hasher.update(part);
    }

    let mut out = Zeroizing::new([0u8; EXPANDED_SIZE]);
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Computes the challenge `c = H(R.X || R.Y || A.X || A.Y || msg)`.
///
/// The digest is read as a big-endian integer and is not reduced.
pub(crate) fn hash_challenge<P, H>(
    hasher: &mut H,
    r: &P,
    a: &P,
    msg: &[u8],
) -> Result<BigUint, EddsaError>
where
    P: Group,
    H: ChallengeHasher + ?Sized,
{
    let mut input = Vec::with_capacity(4 * FIELD_SIZE + msg.len());
    input.extend_from_slice(&r.x_bytes());
    input.extend_from_slice(&r.y_bytes());
    input.extend_from_slice(&a.x_bytes());
    input.extend_from_slice(&a.y_bytes());
    input.extend_from_slice(msg);

    hasher.reset();
    hasher.write(&input).inspect_err(|err| {
        tracing::debug!(error = %err, "challenge hasher rejected write");
    })?;

    Ok(BigUint::from_bytes_be(&hasher.sum()))
}
