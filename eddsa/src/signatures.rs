//! Signature type and its wire encoding.

use curve::{FIELD_SIZE, Group, PointAffine};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::SIGNATURE_SIZE;
use crate::encoding::{FixedBytesVisitor, check_length, decode_point};
use crate::errors::DecodingError;

/// An EdDSA signature consisting of a curve point and a scalar.
///
/// The signature is a pair `(R, S)` where:
/// - `R = r * Base` is the commitment, `r` the per-message blinding factor
/// - `S = (r + c * s) mod order` is the response, stored big-endian
///
/// # Structure
///
/// The signature satisfies `8 * S * Base == 8 * (R + c * A)` where
/// `c = H(R.X || R.Y || A.X || A.Y || msg)` is the Fiat-Shamir challenge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature<P = PointAffine> {
    /// The commitment point R
    pub r: P,
    /// The response scalar, 32 bytes big-endian
    pub s: [u8; FIELD_SIZE],
}

impl<P: Group> Signature<P> {
    /// `R.X || R.Y || S`, 96 bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..2 * FIELD_SIZE].copy_from_slice(&self.r.to_bytes());
        out[2 * FIELD_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Parses `R.X || R.Y || S`.
    ///
    /// `R` is not checked against the curve and `S` is not checked against the
    /// group order; a malformed signature simply fails verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodingError> {
        check_length(bytes, SIGNATURE_SIZE)?;

        let r = decode_point(&bytes[..2 * FIELD_SIZE])?;
        let mut s = [0u8; FIELD_SIZE];
        s.copy_from_slice(&bytes[2 * FIELD_SIZE..]);

        Ok(Self { r, s })
    }
}

impl<P: Group> Serialize for Signature<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, P: Group> Deserialize<'de> for Signature<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = deserializer.deserialize_bytes(FixedBytesVisitor::<SIGNATURE_SIZE>)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_layout() {
        let r = PointAffine::generator();
        let sig = Signature { r, s: [7u8; FIELD_SIZE] };
        let bytes = sig.to_bytes();

        assert_eq!(bytes[..FIELD_SIZE], r.x_bytes());
        assert_eq!(bytes[FIELD_SIZE..2 * FIELD_SIZE], r.y_bytes());
        assert_eq!(bytes[2 * FIELD_SIZE..], [7u8; FIELD_SIZE]);
        assert_eq!(<Signature>::from_bytes(&bytes).expect("decode"), sig);
    }

    #[test]
    fn test_signature_length_checked() {
        let err = Signature::<PointAffine>::from_bytes(&[0u8; SIGNATURE_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            DecodingError::InvalidLength {
                expected: SIGNATURE_SIZE,
                actual: SIGNATURE_SIZE + 1
            }
        );
    }
}
