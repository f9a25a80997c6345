//! EdDSA signatures over the twisted Edwards curve of the BN254 scalar field.
//!
//! This library implements a Schnorr-style signature scheme using:
//! - Deterministic key derivation from a 32-byte seed (Blake2b-512, clamping)
//! - Per-message blinding factors derived from the key and the message
//! - A caller-supplied hash function for the Fiat-Shamir challenge
//! - Cofactor-cleared verification
//!
//! The curve arithmetic is consumed through the [`curve::Group`] trait, so the
//! scheme can run over any point type that implements it.
//!
//! # Example
//!
//! ```
//! use eddsa::{Eddsa, PublicKey, Signature};
//! use sha2::Sha256;
//!
//! let eddsa = Eddsa::bn254();
//!
//! // Derive a key pair from a seed
//! let (public, private) = eddsa.generate_key(&[0u8; 32]);
//! assert_eq!(private.public(), &public);
//!
//! // Sign and verify
//! let mut hasher = Sha256::default();
//! let signature = eddsa.sign(&private, b"test", &mut hasher).expect("signing failed");
//! let is_valid = eddsa
//!     .verify(&signature, b"test", &public, &mut hasher)
//!     .expect("verification failed");
//! assert!(is_valid);
//!
//! // Wire encodings
//! let decoded = <Signature>::from_bytes(&signature.to_bytes()).expect("decode");
//! assert_eq!(decoded, signature);
//! let decoded = <PublicKey>::from_bytes(&public.to_bytes()).expect("decode");
//! assert_eq!(decoded, public);
//! ```
//!
//! # Security Considerations
//!
//! - Seeds must come from a cryptographically secure source
//! - The internal 512-bit hash is fixed; keys depend on it
//! - Public keys compare in constant time; private key bytes are wiped on drop
//! - A challenge hasher instance must not be shared across threads

mod constants;
mod encoding;
mod errors;
mod hash;
mod keys;
mod scheme;
mod signatures;


pub use constants::{
    FIELD_SIZE, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, RAND_SRC_SIZE, SCALAR_SIZE, SEED_SIZE,
    SIGNATURE_SIZE,
};
pub use errors::{DecodingError, EddsaError};
pub use hash::ChallengeHasher;
pub use keys::{PrivateKey, PublicKey, clamp_scalar};
pub use scheme::Eddsa;
pub use signatures::Signature;
