//! Normalization, addition and subtraction.

use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Status;
use crate::defs::MAX_DIGITS;
use crate::mantissa::add_magnitudes;
use crate::mantissa::add_small;
use crate::mantissa::cmp_magnitudes;
use crate::mantissa::mul_small;
use crate::mantissa::shift_left_digits;
use crate::mantissa::shift_right_digits;
use crate::mantissa::sub_magnitudes;
use crate::mantissa::LimbBuf;
use crate::num::Decimal;
use core::cmp::Ordering;

// the scaled up mantissa has at least two digits more than any result keeps
const STICKY_SHIFT: usize = MAX_DIGITS + 3;

impl Decimal {
    /// Brings `d1` and `d2` to a common exponent.
    /// The number with the larger exponent is scaled up while its mantissa fits.
    /// If that is not enough, the mantissa of the other number is scaled down and rounded using `rm`.
    ///
    /// ## Status
    ///
    ///  - LossOfPrecision: nonzero digits were discarded from the number with the smaller exponent.
    pub fn normalize(d1: &mut Decimal, d2: &mut Decimal, rm: RoundingMode) -> Status {
        if d1.is_nan() || d2.is_nan() || d1.e == d2.e {
            return Status::NoError;
        }

        // exponent of zero is irrelevant
        if d1.n == 0 {
            d1.e = d2.e;
            return Status::NoError;
        }
        if d2.n == 0 {
            d2.e = d1.e;
            return Status::NoError;
        }

        let (hi, lo) = if d1.e > d2.e { (d1, d2) } else { (d2, d1) };
        let diff = (hi.e - lo.e) as usize;

        let mut m = LimbBuf::from_slice(hi.mantissa());
        let mut k = 0;
        while k < diff {
            let scaled = mul_small(&m, 10);
            if !scaled.fits() {
                break;
            }
            m = scaled;
            k += 1;
        }

        if k > 0 {
            hi.set_mantissa(&m);
            hi.e -= k as i32;
            hi.compact = false;
        }

        if k == diff {
            return Status::NoError;
        }

        let (q, discarded) = shift_right_digits(lo.mantissa(), diff - k);
        lo.e = hi.e;
        lo.compact = false;

        if discarded.is_zero() {
            lo.set_mantissa(&q);
            return Status::NoError;
        }

        let odd = q.first().map_or(false, |d| d & 1 != 0);
        let q = if rm.round_up(discarded.digit, discarded.sticky, odd) {
            add_small(&q, 1)
        } else {
            q
        };

        lo.set_mantissa(&q);
        if lo.n == 0 {
            lo.s = Sign::Pos;
        }

        Status::LossOfPrecision
    }

    /// Adds `d2` to `self` and returns the result of the addition rounded using `rm`.
    ///
    /// ## Status
    ///
    ///  - LossOfPrecision: the exact sum does not fit into the mantissa.
    ///  - Overflow: the result is too large.
    pub fn add(&self, d2: &Self, rm: RoundingMode) -> (Self, Status) {
        self.add_sub(d2, false, rm)
    }

    /// Subtracts `d2` from `self` and returns the result of the subtraction rounded using `rm`.
    ///
    /// ## Status
    ///
    /// Same as for addition.
    pub fn sub(&self, d2: &Self, rm: RoundingMode) -> (Self, Status) {
        self.add_sub(d2, true, rm)
    }

    // subtraction is addition of negated d2
    fn add_sub(&self, d2: &Self, negate: bool, rm: RoundingMode) -> (Self, Status) {
        if self.is_nan() || d2.is_nan() {
            return (Self::NAN, Status::NoError);
        }

        let d2 = if negate { d2.neg() } else { *d2 };

        if self.is_zero() {
            return (d2, Status::NoError);
        }
        if d2.is_zero() {
            return (*self, Status::NoError);
        }

        let (hi, lo) = if self.e >= d2.e { (self, &d2) } else { (&d2, self) };
        let (m1, m2, e) = Self::align(hi, lo);

        if hi.s == lo.s {
            let (m, _) = add_magnitudes(&m1, &m2);
            return Self::from_wide(hi.s, &m, e, rm, false);
        }

        match cmp_magnitudes(&m1, &m2) {
            Ordering::Greater => Self::from_wide(hi.s, &sub_magnitudes(&m1, &m2), e, rm, false),
            Ordering::Less => Self::from_wide(lo.s, &sub_magnitudes(&m2, &m1), e, rm, false),
            Ordering::Equal => (Self::ZERO, Status::NoError),
        }
    }

    // Brings the mantissas of nonzero `hi` and `lo`, where `hi` has the larger exponent,
    // to a common exponent without rounding.
    // If `lo` lies entirely below the rounding position of any result, it is replaced
    // with a single unit below the guard digit: it only decides the rounding then.
    fn align(hi: &Decimal, lo: &Decimal) -> (LimbBuf, LimbBuf, i64) {
        let lo_top = lo.e as i64 + lo.digits() as i64;

        if lo_top <= hi.e as i64 - STICKY_SHIFT as i64 + 1 {
            let m1 = shift_left_digits(hi.mantissa(), STICKY_SHIFT);
            (m1, LimbBuf::from_u128(1), hi.e as i64 - STICKY_SHIFT as i64)
        } else {
            let gap = (hi.e - lo.e) as usize;
            let m1 = shift_left_digits(hi.mantissa(), gap);
            (m1, LimbBuf::from_slice(lo.mantissa()), lo.e as i64)
        }
    }
}
