//! Twisted Edwards curve over the BN254 scalar field.
//!
//! This crate provides the affine point type, the group interface consumed by
//! the signature scheme, the fixed domain parameters (base point, subgroup
//! order, cofactor) and helpers for field element encoding and random scalar
//! sampling. Field arithmetic itself comes from `ark-bn254`.

mod affine;
mod basefield;
mod group;
mod params;
mod random;

pub use affine::PointAffine;
pub use basefield::{field_from_bytes, field_to_bytes, BaseField, FIELD_SIZE};
pub use group::Group;
pub use num_bigint::BigUint;
pub use params::DomainParams;
pub use random::random_scalar;
