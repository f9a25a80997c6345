//! Key generation, signing and verification.

use curve::{BigUint, DomainParams, Group, PointAffine};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::constants::{RAND_SRC_SIZE, SCALAR_SIZE, SEED_SIZE};
use crate::encoding::scalar_to_bytes;
use crate::errors::EddsaError;
use crate::hash::{ChallengeHasher, expand, hash_challenge};
use crate::keys::{PrivateKey, PublicKey, clamp_scalar};
use crate::signatures::Signature;

/// An EdDSA instance bound to one set of domain parameters.
///
/// The parameters are captured at construction and never change. The
/// instance holds no other state, so it can be shared freely between threads;
/// each concurrent call needs its own challenge hasher.
///
/// # Example
///
/// ```
/// use eddsa::Eddsa;
/// use sha2::Sha256;
///
/// let eddsa = Eddsa::bn254();
/// let (public, private) = eddsa.generate_key(&[7u8; 32]);
///
/// let mut hasher = Sha256::default();
/// let sig = eddsa.sign(&private, b"hello", &mut hasher).expect("signing failed");
/// assert!(eddsa.verify(&sig, b"hello", &public, &mut hasher).expect("verification failed"));
/// ```
#[derive(Clone, Debug)]
pub struct Eddsa<P = PointAffine> {
    params: DomainParams<P>,
}

impl Eddsa<PointAffine> {
    /// The scheme over the twisted Edwards curve of the BN254 scalar field.
    pub fn bn254() -> Self {
        Self::new(DomainParams::bn254())
    }
}

impl Default for Eddsa<PointAffine> {
    fn default() -> Self {
        Self::bn254()
    }
}

impl<P: Group> Eddsa<P> {
    /// Creates a scheme over the given domain parameters.
    ///
    /// The parameters are trusted: the base point is assumed to be on the
    /// curve and to generate the subgroup of order `params.order`.
    pub fn new(params: DomainParams<P>) -> Self {
        Self { params }
    }

    /// The domain parameters captured at construction.
    pub fn params(&self) -> &DomainParams<P> {
        &self.params
    }

    /// Derives a key pair from a 32-byte seed.
    ///
    /// Deterministic: the same seed always yields the same keys.
    ///
    /// 1. `h = Blake2b-512(seed)`
    /// 2. the upper half of `h` becomes the blinding seed
    /// 3. the lower half is clamped and reversed into the big-endian scalar `s`
    /// 4. `A = s * Base`
    pub fn generate_key(&self, seed: &[u8; SEED_SIZE]) -> (PublicKey<P>, PrivateKey<P>) {
        let h = expand(&[seed.as_slice()]);

        let mut lower = Zeroizing::new([0u8; SCALAR_SIZE]);
        lower.copy_from_slice(&h[..SCALAR_SIZE]);
        let mut rand_src = Zeroizing::new([0u8; RAND_SRC_SIZE]);
        rand_src.copy_from_slice(&h[SCALAR_SIZE..SCALAR_SIZE + RAND_SRC_SIZE]);

        let scalar = Zeroizing::new(clamp_scalar(&lower));
        let s = BigUint::from_bytes_be(&scalar[..]);
        let public = PublicKey::new(self.params.base.scalar_mul_windowed(&s));

        (public, PrivateKey::from_parts(public, *scalar, *rand_src))
    }

    /// Draws a fresh seed from `rng` and derives a key pair from it.
    pub fn generate_key_from_rng<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (PublicKey<P>, PrivateKey<P>) {
        let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
        rng.fill_bytes(&mut seed[..]);
        self.generate_key(&seed)
    }

    /// Signs a message.
    ///
    /// 1. `r = H512(randSrc || msg)[..32]`, read big-endian
    /// 2. `R = r * Base`, checked on-curve
    /// 3. `c = hasher(R.X || R.Y || A.X || A.Y || msg)`
    /// 4. `S = (r + c * s) mod order`
    ///
    /// The blinding factor depends only on the key and the message, so signing
    /// needs no randomness and the same inputs give the same signature.
    ///
    /// # Errors
    ///
    /// - `EddsaError::InvalidPoint` if the key's public point or `R` is not on
    ///   the curve
    /// - `EddsaError::HashWrite` if the hasher rejects the challenge input
    pub fn sign<H: ChallengeHasher + ?Sized>(
        &self,
        key: &PrivateKey<P>,
        msg: &[u8],
        hasher: &mut H,
    ) -> Result<Signature<P>, EddsaError> {
        if !key.public().point().is_on_curve() {
            debug!("signing key's public point is not on the curve");
            return Err(EddsaError::InvalidPoint);
        }

        let blinding = expand(&[key.rand_src().as_slice(), msg]);
        let r = BigUint::from_bytes_be(&blinding[..SCALAR_SIZE]);

        let commitment = self.params.base.scalar_mul_windowed(&r);
        if !commitment.is_on_curve() {
            debug!("signature commitment is not on the curve");
            return Err(EddsaError::InvalidPoint);
        }

        let c = hash_challenge(hasher, &commitment, key.public().point(), msg)?;

        let s = BigUint::from_bytes_be(key.scalar());
        let response = (&r + c * &s) % &self.params.order;

        Ok(Signature {
            r: commitment,
            s: scalar_to_bytes(&response),
        })
    }

    /// Verifies a signature.
    ///
    /// Checks `cofactor * (S * Base) == cofactor * (R + c * A)` with `c`
    /// recomputed as in `sign`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if the equation does not hold
    /// - `Err(EddsaError::InvalidPoint)` if the public key or either side of
    ///   the equation is off the curve
    /// - `Err(EddsaError::HashWrite)` if the hasher rejects the challenge input
    pub fn verify<H: ChallengeHasher + ?Sized>(
        &self,
        sig: &Signature<P>,
        msg: &[u8],
        key: &PublicKey<P>,
        hasher: &mut H,
    ) -> Result<bool, EddsaError> {
        let a = key.point();
        if !a.is_on_curve() {
            debug!("public key is not on the curve");
            return Err(EddsaError::InvalidPoint);
        }

        let c = hash_challenge(hasher, &sig.r, a, msg)?;
        let s = BigUint::from_bytes_be(&sig.s);
        let cofactor = &self.params.cofactor;

        let lhs = self.params.base.scalar_mul_windowed(&s).scalar_mul(cofactor);
        if !lhs.is_on_curve() {
            debug!("left-hand side of the verification equation is not on the curve");
            return Err(EddsaError::InvalidPoint);
        }

        let rhs = (a.scalar_mul_windowed(&c) + sig.r).scalar_mul(cofactor);
        if !rhs.is_on_curve() {
            debug!("right-hand side of the verification equation is not on the curve");
            return Err(EddsaError::InvalidPoint);
        }

        let valid = lhs == rhs;
        if !valid {
            debug!("signature equation does not hold");
        }
        Ok(valid)
    }
}
