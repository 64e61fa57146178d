//! Decimal definition, construction, and the routine fitting results into a number.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Limb;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::Status;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::defs::MAX_DIGITS;
use crate::defs::MAX_LIMBS;
use crate::mantissa::add_small;
use crate::mantissa::decimal_digits;
use crate::mantissa::div_small;
use crate::mantissa::mul_small;
use crate::mantissa::shift_right_digits;
use crate::mantissa::significant_len;
use crate::mantissa::Discarded;
use crate::mantissa::LimbBuf;

const ZEROED_MANTISSA: [Limb; MAX_LIMBS] = [0; MAX_LIMBS];

/// Decimal number with a mantissa of a fixed size, and exponent.
/// The value is `mantissa * 10^exponent`.
///
/// Zero has zero mantissa length and positive sign.
/// Zero mantissa length with negative sign is not a number.
#[derive(Copy, Clone, Debug)]
pub struct Decimal {
    pub(crate) e: Exponent,
    pub(crate) n: usize, // number of limbs in use, 0 for zero and NaN
    pub(crate) s: Sign,
    pub(crate) compact: bool,
    pub(crate) m: [Limb; MAX_LIMBS],
}

impl Decimal {
    /// Value of 0.
    pub const ZERO: Decimal = Decimal {
        e: 0,
        n: 0,
        s: Sign::Pos,
        compact: true,
        m: ZEROED_MANTISSA,
    };

    /// Value of 1.
    pub const ONE: Decimal = Decimal {
        e: 0,
        n: 1,
        s: Sign::Pos,
        compact: true,
        m: {
            let mut m = ZEROED_MANTISSA;
            m[0] = 1;
            m
        },
    };

    /// Not a number.
    pub const NAN: Decimal = Decimal {
        e: 0,
        n: 0,
        s: Sign::Neg,
        compact: true,
        m: ZEROED_MANTISSA,
    };

    /// Largest finite value.
    pub const MAX: Decimal = Decimal {
        e: EXPONENT_MAX,
        n: MAX_LIMBS,
        s: Sign::Pos,
        compact: true,
        m: [Limb::MAX; MAX_LIMBS],
    };

    /// Smallest finite value.
    pub const MIN: Decimal = Decimal {
        e: EXPONENT_MAX,
        n: MAX_LIMBS,
        s: Sign::Neg,
        compact: true,
        m: [Limb::MAX; MAX_LIMBS],
    };

    /// Smallest positive value.
    pub const MIN_POSITIVE: Decimal = Decimal {
        e: EXPONENT_MIN,
        n: 1,
        s: Sign::Pos,
        compact: true,
        m: {
            let mut m = ZEROED_MANTISSA;
            m[0] = 1;
            m
        },
    };

    /// Returns a new number with value of 0.
    pub fn new() -> Self {
        Self::ZERO
    }

    /// Constructs a number from the sign, the mantissa value, and the exponent.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the exponent is outside of the range from `EXPONENT_MIN` to `EXPONENT_MAX`.
    pub fn from_parts(s: Sign, mantissa: u128, e: Exponent) -> Result<Self, Error> {
        if !(EXPONENT_MIN..=EXPONENT_MAX).contains(&e) {
            return Err(Error::InvalidArgument);
        }

        if mantissa == 0 {
            return Ok(Self::ZERO);
        }

        let mut ret = Self::with_mantissa(s, &LimbBuf::from_u128(mantissa), e);
        ret.compact = false;
        Ok(ret)
    }

    /// Constructs a number from raw parts: limbs least significant first, number of limbs in use,
    /// sign, exponent, and the compact flag.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `n` exceeds `MAX_LIMBS`, a limb at or above `n` is nonzero,
    /// the limb at `n - 1` is zero, or the exponent is out of range.
    pub fn from_raw_parts(
        m: [Limb; MAX_LIMBS],
        n: usize,
        s: Sign,
        e: Exponent,
        compact: bool,
    ) -> Result<Self, Error> {
        if n > MAX_LIMBS
            || m[n..].iter().any(|v| *v != 0)
            || (n > 0 && m[n - 1] == 0)
            || !(EXPONENT_MIN..=EXPONENT_MAX).contains(&e)
        {
            return Err(Error::InvalidArgument);
        }

        if n == 0 {
            return Ok(if s.is_negative() { Self::NAN } else { Self::ZERO });
        }

        Ok(Decimal { e, n, s, compact, m })
    }

    /// Decomposes to raw parts: limbs, number of limbs in use, sign, exponent, and the compact flag.
    pub fn to_raw_parts(&self) -> ([Limb; MAX_LIMBS], usize, Sign, Exponent, bool) {
        (self.m, self.n, self.s, self.e, self.compact)
    }

    /// Returns the sign of a number.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the exponent of a number.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the limbs of the mantissa in use, least significant first.
    pub fn mantissa(&self) -> &[Limb] {
        &self.m[..self.n]
    }

    /// Returns the value of the mantissa.
    pub fn mantissa_u128(&self) -> u128 {
        self.mantissa()
            .iter()
            .rev()
            .fold(0u128, |acc, d| (acc << Limb::BITS) | *d as u128)
    }

    /// Returns true if `self` is not a number.
    pub fn is_nan(&self) -> bool {
        self.n == 0 && self.s.is_negative()
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.n == 0 && self.s.is_positive()
    }

    /// Returns true if `self` is less than zero.
    pub fn is_negative(&self) -> bool {
        self.n > 0 && self.s.is_negative()
    }

    /// Returns true if `self` is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.n > 0 && self.s.is_positive()
    }

    /// Returns true if no trailing zero digits can be removed from the mantissa.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        let mut ret = *self;
        if !self.is_nan() {
            ret.s = Sign::Pos;
        }
        ret
    }

    /// Returns the number with the opposite sign. Zero and NaN are returned unchanged.
    pub fn neg(&self) -> Self {
        let mut ret = *self;
        if self.n > 0 {
            ret.s = ret.s.invert();
        }
        ret
    }

    /// Removes trailing zero digits from the mantissa without changing the value.
    pub fn compact(&mut self) {
        if self.n > 0 && !self.compact {
            let mut m = LimbBuf::from_slice(self.mantissa());
            let mut e = self.e;

            while e < EXPONENT_MAX {
                let (q, r) = div_small(&m, 10);
                if r != 0 {
                    break;
                }
                m = q;
                e += 1;
            }

            self.set_mantissa(&m);
            self.e = e;
        }
        self.compact = true;
    }

    /// Returns the compacted copy of a number.
    pub fn compacted(&self) -> Self {
        let mut ret = *self;
        ret.compact();
        ret
    }

    /// Returns the number of decimal digits in the mantissa.
    pub(crate) fn digits(&self) -> usize {
        decimal_digits(self.mantissa())
    }

    /// Largest finite magnitude with sign `s`.
    pub(crate) fn max_value(s: Sign) -> Self {
        if s.is_negative() {
            Self::MIN
        } else {
            Self::MAX
        }
    }

    // Builds a number from a mantissa known to fit.
    pub(crate) fn with_mantissa(s: Sign, m: &[Limb], e: Exponent) -> Self {
        let mut ret = Decimal {
            e,
            n: 0,
            s,
            compact: false,
            m: ZEROED_MANTISSA,
        };
        ret.set_mantissa(m);
        ret
    }

    pub(crate) fn set_mantissa(&mut self, m: &[Limb]) {
        let n = significant_len(m);
        debug_assert!(n <= MAX_LIMBS);
        self.m = ZEROED_MANTISSA;
        self.m[..n].copy_from_slice(&m[..n]);
        self.n = n;
    }

    /// Fits a magnitude of any width with an exponent of any value into a number.
    /// Digits that do not fit are discarded and the result is rounded using `rm`.
    /// `inexact` tells that the magnitude was already truncated, e.g. by a division with nonzero remainder.
    /// The result is compacted.
    pub(crate) fn from_wide(s: Sign, m: &[Limb], e: i64, rm: RoundingMode, inexact: bool) -> (Self, Status) {
        let mut m = LimbBuf::from_slice(m);
        let mut e = e;

        if m.is_zero() {
            let status = if inexact { Status::Underflow } else { Status::NoError };
            return (Self::ZERO, status);
        }

        // digits to drop to fit the limb budget and the exponent range
        let mut drop = 0;
        if !m.fits() {
            drop = decimal_digits(&m).saturating_sub(MAX_DIGITS + 1);
        }
        if e + (drop as i64) < EXPONENT_MIN as i64 {
            drop = (EXPONENT_MIN as i64 - e) as usize;
        }

        let mut discarded = Discarded {
            digit: 0,
            sticky: inexact,
        };

        if drop > 0 {
            let (q, d) = shift_right_digits(&m, drop);
            m = q;
            discarded = Discarded {
                digit: d.digit,
                sticky: d.sticky || inexact,
            };
            e += drop as i64;
        }

        if !m.fits() {
            let (q, d) = shift_right_digits(&m, 1);
            m = q;
            discarded = discarded.then(d);
            e += 1;
        }

        let mut status = Status::NoError;

        if !discarded.is_zero() {
            status = Status::LossOfPrecision;

            let odd = m.first().map_or(false, |d| d & 1 != 0);
            if rm.round_up(discarded.digit, discarded.sticky, odd) {
                m = add_small(&m, 1);
                if !m.fits() {
                    // carry out of the limb budget: 2^128 has nonzero last digit
                    let (q, d) = shift_right_digits(&m, 1);
                    let odd = q.first().map_or(false, |d| d & 1 != 0);
                    m = if rm.round_up(d.digit, true, odd) { add_small(&q, 1) } else { q };
                    e += 1;
                }
            }

            if m.is_zero() {
                return (Self::ZERO, Status::Underflow);
            }
        }

        // large exponent can be traded for mantissa digits
        while e > EXPONENT_MAX as i64 {
            let scaled = mul_small(&m, 10);
            if !scaled.fits() {
                return (Self::max_value(s), Status::Overflow);
            }
            m = scaled;
            e -= 1;
        }

        let mut ret = Self::with_mantissa(s, &m, e as Exponent);
        ret.compact();

        (ret, status)
    }

    /// Returns a random number with exponent in the range from `exp_from` to `exp_to` inclusive.
    /// The sign can be positive and negative. Zero is excluded.
    /// The intended use of this function is for testing.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `exp_from` is greater than `exp_to`, or the range exceeds the exponent range.
    #[cfg(feature = "random")]
    pub fn random_normal(exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        use rand::random;

        if exp_from > exp_to || exp_from < EXPONENT_MIN || exp_to > EXPONENT_MAX {
            return Err(Error::InvalidArgument);
        }

        let mantissa = (random::<u128>() >> (random::<u32>() % 128)).max(1);
        let span = (exp_to - exp_from) as u32 + 1;
        let e = exp_from + (random::<u32>() % span) as Exponent;
        let s = if random::<bool>() { Sign::Pos } else { Sign::Neg };

        Self::from_parts(s, mantissa, e)
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}
