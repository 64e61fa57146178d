//! Exponentiation.

use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Status;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::num::Decimal;

impl Decimal {
    /// Computes `self` to the power of the integer `i`. The result is rounded using the rounding mode `rm`.
    /// `0^0` is 1. A negative `i` computes `1 / self^|i|`.
    ///
    /// ## Status
    ///
    ///  - DivideByZero: `self` is zero and `i` is negative.
    ///  - Overflow: the result is too large.
    ///  - Underflow: the result is too small and became zero.
    ///  - LossOfPrecision: an intermediate result was rounded.
    pub fn powi(&self, i: i32, rm: RoundingMode) -> (Self, Status) {
        if self.is_nan() {
            return (Self::NAN, Status::NoError);
        }

        if i == 0 {
            return (Self::ONE, Status::NoError);
        }

        if self.is_zero() {
            return if i > 0 {
                (Self::ZERO, Status::NoError)
            } else {
                (Self::NAN, Status::DivideByZero)
            };
        }

        let n = i.unsigned_abs();
        let s = if self.is_negative() && n & 1 != 0 { Sign::Neg } else { Sign::Pos };
        let mut ret = Self::ONE;
        let mut status = Status::NoError;

        // square and multiply from the most significant bit
        let bits = u32::BITS - n.leading_zeros();
        for bit in (0..bits).rev() {
            let (sq, st) = ret.mul(&ret, rm);
            ret = sq;
            status = status.worst(st);
            if status.is_fatal() {
                break;
            }

            if n & (1 << bit) != 0 {
                let (p, st) = ret.mul(self, rm);
                ret = p;
                status = status.worst(st);
                if status.is_fatal() {
                    break;
                }
            }
        }

        if i > 0 {
            if status == Status::Overflow {
                // intermediate squares are positive
                return (Self::max_value(s), status);
            }
            return (ret, status);
        }

        // reciprocal of a value out of range is out of range on the other side
        if status == Status::Overflow {
            return (Self::ZERO, Status::Underflow);
        }
        if ret.is_zero() {
            return (Self::max_value(s), Status::Overflow);
        }

        let (r, st) = Self::ONE.div(&ret, rm);
        (r, status.worst(st))
    }

    /// Multiplies `self` by 10 to the power of `power`.
    /// Only the exponent changes if the result stays in the exponent range,
    /// otherwise the mantissa is rescaled and rounded using `rm`.
    ///
    /// ## Status
    ///
    ///  - Overflow: the result is too large.
    ///  - Underflow: the result is too small and became zero.
    ///  - LossOfPrecision: nonzero digits were discarded.
    pub fn mul_pow10(&self, power: i16, rm: RoundingMode) -> (Self, Status) {
        if self.n == 0 {
            return (*self, Status::NoError);
        }

        let e = self.e as i64 + power as i64;

        if (EXPONENT_MIN as i64..=EXPONENT_MAX as i64).contains(&e) {
            let mut ret = *self;
            ret.e = e as i32;
            if power < 0 {
                // trailing zeroes held back by the exponent bound may be removable now
                ret.compact = false;
                ret.compact();
            }
            return (ret, Status::NoError);
        }

        Self::from_wide(self.s, self.mantissa(), e, rm, false)
    }
}
