// E(GF(r)) : -x^2 + y^2 = 1 + d*x^2*y^2, r the BN254 scalar field modulus
// d = 12181644023421730124874158521699555681764249180949974110617291017600649128846
// Base point: (9671717474070082183213120605117400219616337014328744928644933853176787189663 :
//              16950150798460657717958625567821834550301663161624707787222815936182638968203)
// Subgroup prime order: 2736030358979909402780800718157159386076813972158567259200215660948447373041 (251 bits)
// Curve cofactor: 8
// a = -1 is a square and d is a non-square in GF(r), so the addition law is complete.

use crate::basefield::{field_from_bytes, field_to_bytes, BaseField, FIELD_SIZE};
use crate::Group;
use ark_ff::{Field, MontFp, One};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use num_bigint::BigUint;

/// Affine point on the twisted Edwards curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointAffine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
}

impl PointAffine {
    /// Get the 'd' coefficient.
    const COEFF_D: BaseField = MontFp!(
        "12181644023421730124874158521699555681764249180949974110617291017600649128846"
    );

    const BASE_X: BaseField = MontFp!(
        "9671717474070082183213120605117400219616337014328744928644933853176787189663"
    );

    const BASE_Y: BaseField = MontFp!(
        "16950150798460657717958625567821834550301663161624707787222815936182638968203"
    );

    /// The neutral element (0, 1).
    pub const IDENTITY: Self = PointAffine {
        x: MontFp!("0"),
        y: MontFp!("1"),
    };

    /// Result of an addition whose denominator vanished.
    ///
    /// This only happens for inputs that are off the curve. (0, 0) is never on
    /// the curve, so the failure surfaces at the next `is_on_curve` check.
    const EXCEPTIONAL: Self = PointAffine {
        x: MontFp!("0"),
        y: MontFp!("0"),
    };

    /// Get the 'a' coefficient: -1
    #[inline]
    fn coeff_a() -> BaseField {
        -BaseField::one()
    }

    /// Create a new affine point.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        PointAffine { x, y }
    }

    /// Base point of the prime-order subgroup.
    pub fn generator() -> Self {
        PointAffine::new(Self::BASE_X, Self::BASE_Y)
    }

    /// Check if a point is on the curve: a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = Self::coeff_a() * x2 + y2;
        let rhs = BaseField::one() + Self::COEFF_D * x2 * y2;

        lhs == rhs
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Negate a point: (-x, y).
    pub fn negate(&self) -> Self {
        PointAffine::new(-self.x, self.y)
    }
}

impl Group for PointAffine {
    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        Self::is_identity(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    #[inline]
    fn is_on_curve(&self) -> bool {
        Self::is_on_curve(self)
    }

    fn x_bytes(&self) -> [u8; FIELD_SIZE] {
        field_to_bytes(&self.x)
    }

    fn y_bytes(&self) -> [u8; FIELD_SIZE] {
        field_to_bytes(&self.y)
    }

    fn from_xy_bytes(x: &[u8; FIELD_SIZE], y: &[u8; FIELD_SIZE]) -> Option<Self> {
        Some(PointAffine::new(field_from_bytes(x)?, field_from_bytes(y)?))
    }
}

impl Add for PointAffine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // x_r = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
        // y_r = (y1*y2 - a*x1*x2) / (1 - d*x1*x2*y1*y2)
        let x1x2 = self.x * other.x;
        let y1y2 = self.y * other.y;
        let dxy = Self::COEFF_D * x1x2 * y1y2;

        let x_num = self.x * other.y + self.y * other.x;
        let y_num = y1y2 - Self::coeff_a() * x1x2;

        let one = BaseField::one();
        match ((one + dxy).inverse(), (one - dxy).inverse()) {
            (Some(x_den_inv), Some(y_den_inv)) => {
                PointAffine::new(x_num * x_den_inv, y_num * y_den_inv)
            }
            _ => Self::EXCEPTIONAL,
        }
    }
}

impl AddAssign for PointAffine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for PointAffine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for PointAffine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for PointAffine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<&BigUint> for PointAffine {
    type Output = Self;

    fn mul(self, scalar: &BigUint) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}
