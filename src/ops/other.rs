//! Comparison and rounding.

use crate::defs::RoundingMode;
use crate::defs::Status;
use crate::defs::NO_SCALE;
use crate::mantissa::add_small;
use crate::mantissa::cmp_magnitudes;
use crate::mantissa::shift_left_digits;
use crate::mantissa::shift_right_digits;
use crate::num::Decimal;
use core::cmp::Ordering;

impl Decimal {
    /// Compares `self` to `d2`.
    /// Returns `None` if any of the numbers is NaN.
    pub fn compare(&self, d2: &Self) -> Option<Ordering> {
        if self.is_nan() || d2.is_nan() {
            return None;
        }

        if self.is_zero() && d2.is_zero() {
            return Some(Ordering::Equal);
        }

        // zero counts as non-negative
        let neg1 = self.is_negative();
        let neg2 = d2.is_negative();

        if neg1 != neg2 {
            return Some(if neg1 { Ordering::Less } else { Ordering::Greater });
        }

        let ret = self.abs_cmp(d2);

        Some(if neg1 { ret.reverse() } else { ret })
    }

    // compare absolute values, operands are not NaN
    fn abs_cmp(&self, d2: &Self) -> Ordering {
        if self.is_zero() {
            return if d2.is_zero() { Ordering::Equal } else { Ordering::Less };
        }
        if d2.is_zero() {
            return Ordering::Greater;
        }

        // position of the most significant digit
        let p1 = self.digits() as i64 + self.e as i64;
        let p2 = d2.digits() as i64 + d2.e as i64;

        if p1 != p2 {
            return p1.cmp(&p2);
        }

        match self.e.cmp(&d2.e) {
            Ordering::Equal => cmp_magnitudes(self.mantissa(), d2.mantissa()),
            Ordering::Greater => {
                let m1 = shift_left_digits(self.mantissa(), (self.e - d2.e) as usize);
                cmp_magnitudes(&m1, d2.mantissa())
            }
            Ordering::Less => {
                let m2 = shift_left_digits(d2.mantissa(), (d2.e - self.e) as usize);
                cmp_magnitudes(self.mantissa(), &m2)
            }
        }
    }

    /// Returns the number rounded to `scale` digits after the decimal point using the rounding mode `rm`.
    /// Negative `scale` rounds to tens, hundreds, and so on. `NO_SCALE` returns the number unchanged.
    ///
    /// ## Status
    ///
    ///  - LossOfPrecision: a nonzero digit was discarded.
    ///  - Underflow: a nonzero number was rounded to zero.
    ///  - Overflow: the rounded number is too large.
    pub fn round(&self, scale: i16, rm: RoundingMode) -> (Self, Status) {
        if self.n == 0 || scale == NO_SCALE {
            return (*self, Status::NoError);
        }

        let target = -(scale as i64);
        if self.e as i64 >= target {
            return (*self, Status::NoError);
        }

        let drop = (target - self.e as i64) as usize;
        let (q, discarded) = shift_right_digits(self.mantissa(), drop);

        if discarded.is_zero() {
            return Self::from_wide(self.s, &q, target, rm, false);
        }

        let odd = q.first().map_or(false, |d| d & 1 != 0);
        let q = if rm.round_up(discarded.digit, discarded.sticky, odd) {
            add_small(&q, 1)
        } else {
            q
        };

        if q.is_zero() {
            return (Self::ZERO, Status::Underflow);
        }

        let (ret, status) = Self::from_wide(self.s, &q, target, rm, false);

        (ret, status.worst(Status::LossOfPrecision))
    }
}
