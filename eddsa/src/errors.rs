//! Error types for the EdDSA scheme.

use thiserror::Error;

/// Errors that can occur during signing and verification operations.
///
/// A signature that is well formed but does not satisfy the verification
/// equation is not an error: `verify` returns `Ok(false)` for it.
#[derive(Debug, Error)]
pub enum EddsaError {
    /// A point failed the on-curve check.
    ///
    /// Raised for a public key whose coordinates do not satisfy the curve
    /// equation, or when the curve implementation hands back a point off the
    /// curve during signing or verification.
    #[error("point not on curve")]
    InvalidPoint,

    /// The caller-supplied challenge hasher rejected a write.
    #[error("challenge hash write failed")]
    HashWrite(#[from] std::io::Error),
}

/// Errors raised while parsing the byte encodings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// The input is not exactly the size of the encoding being parsed.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A coordinate encodes an integer that is not below the field modulus.
    #[error("non-canonical field element")]
    NonCanonicalFieldElement,
}
