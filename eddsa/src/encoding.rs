//! Byte-level helpers shared by the key and signature encodings.

use core::fmt;

use curve::{BigUint, FIELD_SIZE, Group};
use serde::de::{self, SeqAccess, Visitor};

use crate::errors::DecodingError;

pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<(), DecodingError> {
    if bytes.len() != expected {
        return Err(DecodingError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Decodes `X || Y` from the first 64 bytes of `bytes`.
pub(crate) fn decode_point<P: Group>(bytes: &[u8]) -> Result<P, DecodingError> {
    let mut x = [0u8; FIELD_SIZE];
    let mut y = [0u8; FIELD_SIZE];
    x.copy_from_slice(&bytes[..FIELD_SIZE]);
    y.copy_from_slice(&bytes[FIELD_SIZE..2 * FIELD_SIZE]);

    P::from_xy_bytes(&x, &y).ok_or(DecodingError::NonCanonicalFieldElement)
}

/// Fixed-width big-endian encoding, left-padded with zeros.
///
/// `value` must fit in `FIELD_SIZE` bytes; callers pass values reduced modulo
/// the group order.
pub(crate) fn scalar_to_bytes(value: &BigUint) -> [u8; FIELD_SIZE] {
    let be = value.to_bytes_be();
    let mut out = [0u8; FIELD_SIZE];
    let len = be.len().min(FIELD_SIZE);
    out[FIELD_SIZE - len..].copy_from_slice(&be[be.len() - len..]);
    out
}

/// Accepts exactly `N` bytes, either as a byte string or as a sequence.
pub(crate) struct FixedBytesVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedBytesVisitor<N> {
    type Value = [u8; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", N)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        if v.len() != N {
            return Err(E::invalid_length(v.len(), &self));
        }
        let mut out = [0u8; N];
        out.copy_from_slice(v);
        Ok(out)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_to_bytes_pads_left() {
        let bytes = scalar_to_bytes(&BigUint::from(0x0102u32));
        assert!(bytes[..FIELD_SIZE - 2].iter().all(|&b| b == 0));
        assert_eq!(bytes[FIELD_SIZE - 2..], [0x01, 0x02]);

        assert_eq!(scalar_to_bytes(&BigUint::from(0u32)), [0u8; FIELD_SIZE]);
    }

    #[test]
    fn test_scalar_to_bytes_full_width() {
        let full = [0xa5u8; FIELD_SIZE];
        assert_eq!(scalar_to_bytes(&BigUint::from_bytes_be(&full)), full);
    }

    #[test]
    fn test_check_length() {
        assert!(check_length(&[0u8; 4], 4).is_ok());
        assert_eq!(
            check_length(&[0u8; 3], 4),
            Err(DecodingError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }
}
