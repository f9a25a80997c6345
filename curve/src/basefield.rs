use ark_ff::{BigInteger, PrimeField};

/// BN254 scalar field, the base field of the twisted Edwards curve.
pub type BaseField = ark_bn254::Fr;

/// Size of an encoded field element in bytes.
pub const FIELD_SIZE: usize = 32;

/// Encodes a field element as 32 big-endian bytes of its canonical value.
pub fn field_to_bytes(element: &BaseField) -> [u8; FIELD_SIZE] {
    let be = element.into_bigint().to_bytes_be();
    let mut out = [0u8; FIELD_SIZE];
    out[FIELD_SIZE - be.len()..].copy_from_slice(&be);
    out
}

/// Decodes 32 big-endian bytes into a field element.
///
/// Returns `None` when the encoded integer is not below the field modulus, so
/// every element has exactly one accepted encoding.
pub fn field_from_bytes(bytes: &[u8; FIELD_SIZE]) -> Option<BaseField> {
    let element = BaseField::from_be_bytes_mod_order(bytes);
    (field_to_bytes(&element) == *bytes).then_some(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, Zero};

    // r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
    const MODULUS_BE: [u8; FIELD_SIZE] = [
        0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
        0x5d, 0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00,
        0x00, 0x01,
    ];

    #[test]
    fn test_small_values_encode_big_endian() {
        let mut expected = [0u8; FIELD_SIZE];
        assert_eq!(field_to_bytes(&BaseField::zero()), expected);

        expected[FIELD_SIZE - 1] = 1;
        assert_eq!(field_to_bytes(&BaseField::one()), expected);

        let v = BaseField::from(0x0102u64);
        let bytes = field_to_bytes(&v);
        assert_eq!(bytes[FIELD_SIZE - 2..], [0x01, 0x02]);
    }

    #[test]
    fn test_decode_roundtrip() {
        let v = BaseField::from(123456789u64);
        assert_eq!(field_from_bytes(&field_to_bytes(&v)), Some(v));
    }

    #[test]
    fn test_decode_rejects_modulus() {
        assert_eq!(field_from_bytes(&MODULUS_BE), None);
        assert_eq!(field_from_bytes(&[0xff; FIELD_SIZE]), None);

        let mut below = MODULUS_BE;
        below[FIELD_SIZE - 1] = 0x00;
        assert_eq!(field_from_bytes(&below), Some(-BaseField::one()));
    }
}
