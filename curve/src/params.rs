use num_bigint::BigUint;

use crate::PointAffine;

// 2736030358979909402780800718157159386076813972158567259200215660948447373041
const BN254_ORDER_BE: [u8; 32] = [
    0x06, 0x0c, 0x89, 0xce, 0x5c, 0x26, 0x34, 0x05, 0x37, 0x0a, 0x08, 0xb6, 0xd0, 0x30, 0x2b, 0x0b,
    0xab, 0x3e, 0xed, 0xb8, 0x39, 0x20, 0xee, 0x0a, 0x67, 0x72, 0x97, 0xdc, 0x39, 0x21, 0x26, 0xf1,
];

const BN254_COFACTOR: u32 = 8;

/// Fixed description of the signature group.
///
/// Built once and handed to whoever needs it; nothing in this workspace reads
/// curve parameters from global state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParams<P> {
    /// Generator of the prime-order subgroup
    pub base: P,
    /// Prime order of the subgroup generated by `base`
    pub order: BigUint,
    /// Ratio between the full group order and `order`
    pub cofactor: BigUint,
}

impl<P> DomainParams<P> {
    /// Bundles a base point with its subgroup order and cofactor.
    ///
    /// Nothing is validated; the values are taken as given.
    pub fn new(base: P, order: BigUint, cofactor: BigUint) -> Self {
        Self {
            base,
            order,
            cofactor,
        }
    }
}

impl DomainParams<PointAffine> {
    /// Parameters of the twisted Edwards curve over the BN254 scalar field.
    pub fn bn254() -> Self {
        Self::new(
            PointAffine::generator(),
            BigUint::from_bytes_be(&BN254_ORDER_BE),
            BigUint::from(BN254_COFACTOR),
        )
    }
}
