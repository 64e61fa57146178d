//! Multiplication and division.

use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Status;
use crate::defs::MAX_DIGITS;
use crate::mantissa::div_magnitudes;
use crate::mantissa::mul_magnitudes;
use crate::mantissa::shift_left_digits;
use crate::num::Decimal;

impl Decimal {
    // sign of a product or a quotient
    fn sign_of(&self, d2: &Self) -> Sign {
        if self.s == d2.s {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    /// Multiplies `self` by `d2` and returns the result of the multiplication rounded using `rm`.
    ///
    /// ## Status
    ///
    ///  - LossOfPrecision: the product does not fit into the mantissa.
    ///  - Overflow: the result is too large.
    ///  - Underflow: the result is too small and became zero.
    pub fn mul(&self, d2: &Self, rm: RoundingMode) -> (Self, Status) {
        if self.is_nan() || d2.is_nan() {
            return (Self::NAN, Status::NoError);
        }

        if self.is_zero() || d2.is_zero() {
            return (Self::ZERO, Status::NoError);
        }

        let (m, _) = mul_magnitudes(self.mantissa(), d2.mantissa());
        let e = self.e as i64 + d2.e as i64;

        Self::from_wide(self.sign_of(d2), &m, e, rm, false)
    }

    /// Divides `self` by `d2` and returns the result of the division rounded using `rm`.
    /// Division by zero returns NaN.
    ///
    /// ## Status
    ///
    ///  - DivideByZero: `d2` is zero.
    ///  - LossOfPrecision: the quotient does not terminate or does not fit into the mantissa.
    ///  - Overflow: the result is too large.
    ///  - Underflow: the result is too small and became zero.
    pub fn div(&self, d2: &Self, rm: RoundingMode) -> (Self, Status) {
        if self.is_nan() || d2.is_nan() {
            return (Self::NAN, Status::NoError);
        }

        if d2.is_zero() {
            return (Self::NAN, Status::DivideByZero);
        }

        if self.is_zero() {
            return (Self::ZERO, Status::NoError);
        }

        // the quotient must have more digits than the mantissa can hold
        let k = (MAX_DIGITS + 2 + d2.digits()).saturating_sub(self.digits());
        let m1 = shift_left_digits(self.mantissa(), k);

        let (q, _, exact) = div_magnitudes(&m1, d2.mantissa());
        let e = self.e as i64 - k as i64 - d2.e as i64;

        Self::from_wide(self.sign_of(d2), &q, e, rm, !exact)
    }
}
