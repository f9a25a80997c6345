use num_bigint::BigUint;
use rand::RngCore;

/// Samples a scalar in `[0, modulus)`.
///
/// Draws 512 bits and reduces them, which keeps the bias negligible for
/// moduli of at most 256 bits.
pub fn random_scalar<R: RngCore + ?Sized>(rng: &mut R, modulus: &BigUint) -> BigUint {
    let mut wide = [0u8; 64];
    rng.fill_bytes(&mut wide);
    BigUint::from_bytes_be(&wide) % modulus
}
