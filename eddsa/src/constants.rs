//! Sizes of the wire encodings.

pub use curve::FIELD_SIZE;

/// Size of the seed consumed by key generation.
pub const SEED_SIZE: usize = 32;

/// Size of the stored secret scalar.
///
/// Fixed at 32 bytes whatever the bit length of the group order; the scalar
/// is clamped, not reduced.
pub const SCALAR_SIZE: usize = FIELD_SIZE;

/// Size of the auxiliary seed used to derive blinding factors.
pub const RAND_SRC_SIZE: usize = 32;

/// Size of a serialized public key: `X || Y`.
pub const PUBLIC_KEY_SIZE: usize = 2 * FIELD_SIZE;

/// Size of a serialized signature: `R.X || R.Y || S`.
pub const SIGNATURE_SIZE: usize = 3 * FIELD_SIZE;

/// Size of a serialized private key: `scalar || randSrc || X || Y`.
pub const PRIVATE_KEY_SIZE: usize = 3 * FIELD_SIZE + RAND_SRC_SIZE;

/// Output size of the fixed internal hash (Blake2b-512).
pub(crate) const EXPANDED_SIZE: usize = 64;
