//! Public and private keys, and the seed-to-scalar derivation.

use core::fmt;

use curve::{Group, PointAffine};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, RAND_SRC_SIZE, SCALAR_SIZE};
use crate::encoding::{FixedBytesVisitor, check_length, decode_point};
use crate::errors::DecodingError;

/// Turns the lower half of the expanded seed into the secret scalar.
///
/// The input is the little-endian scalar as it comes out of the hash. It is
/// clamped the usual EdDSA way (clear the 3 low bits of the first byte, clear
/// bit 7 and set bit 6 of the last byte) and then byte-reversed, so the
/// returned array is the big-endian encoding of the scalar.
///
/// For the returned value this means `scalar[31] & 0x07 == 0`,
/// `scalar[0] & 0x80 == 0` and `scalar[0] & 0x40 != 0`.
pub fn clamp_scalar(lower: &[u8; SCALAR_SIZE]) -> [u8; SCALAR_SIZE] {
    let mut scalar = *lower;
    scalar[0] &= 0xF8;
    scalar[SCALAR_SIZE - 1] &= 0x7F;
    scalar[SCALAR_SIZE - 1] |= 0x40;
    scalar.reverse();
    scalar
}

/// A public key: the curve point `A = s * Base`.
///
/// Equality is constant time over the 64-byte encoding.
#[derive(Copy, Clone, Debug)]
pub struct PublicKey<P = PointAffine> {
    point: P,
}

/// A private key.
///
/// Holds the clamped secret scalar (big-endian), the auxiliary seed used to
/// derive per-message blinding factors, and a copy of the public key. Secret
/// bytes are wiped when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey<P = PointAffine> {
    public: PublicKey<P>,
    scalar: [u8; SCALAR_SIZE],
    rand_src: [u8; RAND_SRC_SIZE],
}

impl<P: Group> PublicKey<P> {
    /// Wraps a point. No curve check happens here; `verify` performs it.
    pub fn new(point: P) -> Self {
        Self { point }
    }

    /// The wrapped point `A`.
    pub fn point(&self) -> &P {
        &self.point
    }

    /// `X || Y`, 64 bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.point.to_bytes()
    }

    /// Parses `X || Y`.
    ///
    /// Rejects wrong lengths and non-canonical coordinates. Points off the
    /// curve are accepted here and rejected by `verify`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        check_length(bytes, PUBLIC_KEY_SIZE)?;
        Ok(Self::new(decode_point(bytes)?))
    }
}

impl<P: Group> ConstantTimeEq for PublicKey<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl<P: Group> PartialEq for PublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: Group> Eq for PublicKey<P> {}

impl<P> PrivateKey<P> {
    pub(crate) fn from_parts(
        public: PublicKey<P>,
        scalar: [u8; SCALAR_SIZE],
        rand_src: [u8; RAND_SRC_SIZE],
    ) -> Self {
        Self {
            public,
            scalar,
            rand_src,
        }
    }

    /// The public key associated with this private key.
    pub fn public(&self) -> &PublicKey<P> {
        &self.public
    }

    pub(crate) fn scalar(&self) -> &[u8; SCALAR_SIZE] {
        &self.scalar
    }

    pub(crate) fn rand_src(&self) -> &[u8; RAND_SRC_SIZE] {
        &self.rand_src
    }
}

impl<P: Group> PrivateKey<P> {
    /// `scalar || randSrc || X || Y`, 128 bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        out[..SCALAR_SIZE].copy_from_slice(&self.scalar);
        out[SCALAR_SIZE..SCALAR_SIZE + RAND_SRC_SIZE].copy_from_slice(&self.rand_src);
        out[SCALAR_SIZE + RAND_SRC_SIZE..].copy_from_slice(&self.public.to_bytes());
        out
    }

    /// Parses `scalar || randSrc || X || Y`.
    ///
    /// The scalar is taken as is; it is not required to be clamped or reduced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        check_length(bytes, PRIVATE_KEY_SIZE)?;

        let (scalar_bytes, rest) = bytes.split_at(SCALAR_SIZE);
        let (rand_src_bytes, public_bytes) = rest.split_at(RAND_SRC_SIZE);

        let mut scalar = Zeroizing::new([0u8; SCALAR_SIZE]);
        scalar.copy_from_slice(scalar_bytes);
        let mut rand_src = Zeroizing::new([0u8; RAND_SRC_SIZE]);
        rand_src.copy_from_slice(rand_src_bytes);

        let public = PublicKey::from_bytes(public_bytes)?;
        Ok(Self::from_parts(public, *scalar, *rand_src))
    }
}

impl<P: Group> ConstantTimeEq for PrivateKey<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl<P: Group> PartialEq for PrivateKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: Group> Eq for PrivateKey<P> {}

impl<P: fmt::Debug> fmt::Debug for PrivateKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl<P> Drop for PrivateKey<P> {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.rand_src.zeroize();
    }
}

impl<P> ZeroizeOnDrop for PrivateKey<P> {}

impl<P: Group> Serialize for PublicKey<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, P: Group> Deserialize<'de> for PublicKey<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = deserializer.deserialize_bytes(FixedBytesVisitor::<PUBLIC_KEY_SIZE>)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

impl<P: Group> Serialize for PrivateKey<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes()[..])
    }
}

impl<'de, P: Group> Deserialize<'de> for PrivateKey<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Zeroizing::new(
            deserializer.deserialize_bytes(FixedBytesVisitor::<PRIVATE_KEY_SIZE>)?,
        );
        Self::from_bytes(&bytes[..]).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_sets_and_clears_bits() {
        let scalar = clamp_scalar(&[0xff; SCALAR_SIZE]);
        assert_eq!(scalar[0], 0x7f);
        assert_eq!(scalar[SCALAR_SIZE - 1], 0xf8);
        assert!(scalar[1..SCALAR_SIZE - 1].iter().all(|&b| b == 0xff));

        let scalar = clamp_scalar(&[0x00; SCALAR_SIZE]);
        assert_eq!(scalar[0], 0x40);
        assert!(scalar[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clamp_reverses_byte_order() {
        let mut lower = [0u8; SCALAR_SIZE];
        for (i, b) in lower.iter_mut().enumerate() {
            *b = (i as u8) << 3;
        }
        lower[SCALAR_SIZE - 1] = 0x40;

        let scalar = clamp_scalar(&lower);
        for i in 0..SCALAR_SIZE {
            assert_eq!(scalar[i], lower[SCALAR_SIZE - 1 - i]);
        }
    }

    #[test]
    fn test_public_key_length_checked() {
        let err = PublicKey::<PointAffine>::from_bytes(&[0u8; PUBLIC_KEY_SIZE - 1]).unwrap_err();
        assert_eq!(
            err,
            DecodingError::InvalidLength {
                expected: PUBLIC_KEY_SIZE,
                actual: PUBLIC_KEY_SIZE - 1
            }
        );
    }

    #[test]
    fn test_public_key_rejects_non_canonical() {
        let err = PublicKey::<PointAffine>::from_bytes(&[0xff; PUBLIC_KEY_SIZE]).unwrap_err();
        assert_eq!(err, DecodingError::NonCanonicalFieldElement);
    }

    #[test]
    fn test_public_key_equality_is_bytewise() {
        let g = PointAffine::generator();
        let a = PublicKey::new(g);
        let b = <PublicKey>::from_bytes(&g.to_bytes()).expect("decode");
        let c = PublicKey::new(g.double());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
    }

    #[test]
    fn test_private_key_debug_redacts_secrets() {
        let key = PrivateKey::from_parts(
            PublicKey::new(PointAffine::generator()),
            [0xab; SCALAR_SIZE],
            [0xcd; RAND_SRC_SIZE],
        );
        let rendered = format!("{key:?}");
        assert!(rendered.contains("PrivateKey"));
        assert!(!rendered.contains("scalar"));
        assert!(!rendered.contains("rand_src"));
    }
}
