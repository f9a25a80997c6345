use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;

use crate::FIELD_SIZE;

/// Point arithmetic needed by the signature scheme.
///
/// Implementors are affine points of a twisted Edwards curve. Coordinates are
/// exposed only through their 32-byte big-endian encodings.
pub trait Group:
    Sized
    + Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
{
    /// The neutral element `(0, 1)`.
    fn identity() -> Self;

    /// Returns true if the point is the neutral element.
    fn is_identity(&self) -> bool;

    /// Returns `2 * self`.
    fn double(&self) -> Self;

    /// Returns `-self`, i.e. `(-x, y)`.
    fn negate(&self) -> Self;

    /// Checks the curve equation for the point's coordinates.
    fn is_on_curve(&self) -> bool;

    /// The x coordinate, 32 bytes big-endian.
    fn x_bytes(&self) -> [u8; FIELD_SIZE];

    /// The y coordinate, 32 bytes big-endian.
    fn y_bytes(&self) -> [u8; FIELD_SIZE];

    /// Rebuilds a point from encoded coordinates.
    ///
    /// Only the field encodings are validated; the result may lie off the
    /// curve and callers must check `is_on_curve` before trusting it.
    fn from_xy_bytes(x: &[u8; FIELD_SIZE], y: &[u8; FIELD_SIZE]) -> Option<Self>;

    /// `X || Y`, each coordinate big-endian.
    fn to_bytes(&self) -> [u8; 2 * FIELD_SIZE] {
        let mut out = [0u8; 2 * FIELD_SIZE];
        out[..FIELD_SIZE].copy_from_slice(&self.x_bytes());
        out[FIELD_SIZE..].copy_from_slice(&self.y_bytes());
        out
    }

    /// Double-and-add from the most significant bit.
    #[inline]
    fn scalar_mul(&self, scalar: &BigUint) -> Self {
        let mut result = Self::identity();

        for byte in scalar.to_bytes_be() {
            for shift in (0..8).rev() {
                result = result.double();
                if (byte >> shift) & 1 == 1 {
                    result = result + *self;
                }
            }
        }

        result
    }

    /// Fixed 4-bit window multiplication.
    ///
    /// Precomputes `0..16` multiples of the point and consumes the scalar one
    /// nibble at a time, most significant first. Gives the same result as
    /// `scalar_mul` with about a quarter of the additions.
    fn scalar_mul_windowed(&self, scalar: &BigUint) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let mut result = Self::identity();

        for byte in scalar.to_bytes_be() {
            for shift in [4u8, 0] {
                result = result.double();
                result = result.double();
                result = result.double();
                result = result.double();

                let window = ((byte >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + table[window];
                }
            }
        }

        result
    }

    /// Multiplies by a small integer, least significant bit first.
    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}
