//! Decimal digit operations on magnitudes.

use super::cmp_magnitudes;
use super::div_magnitudes;
use super::div_small;
use super::mul_magnitudes;
use super::mul_small;
use super::LimbBuf;
use crate::common::consts::POW10;
use crate::common::consts::POW10_TABLE_MAX;
use crate::defs::Limb;
use core::cmp::Ordering;

/// Digits removed from a magnitude by a right shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Discarded {
    /// The most significant removed digit.
    pub digit: u8,

    /// True if any less significant removed digit is nonzero.
    pub sticky: bool,
}

impl Discarded {
    /// True if nothing but zero digits was removed.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digit == 0 && !self.sticky
    }

    /// Combine with digits removed by a subsequent shift.
    pub fn then(self, next: Discarded) -> Discarded {
        Discarded {
            digit: next.digit,
            sticky: next.sticky || !self.is_zero(),
        }
    }
}

/// Returns 10^k.
pub fn pow10(k: usize) -> LimbBuf {
    if k <= POW10_TABLE_MAX {
        POW10[k].clone()
    } else {
        let (ret, _) = mul_magnitudes(&POW10[POW10_TABLE_MAX], &pow10(k - POW10_TABLE_MAX));
        ret
    }
}

/// Number of decimal digits of a magnitude, 0 for zero.
pub fn decimal_digits(m: &[Limb]) -> usize {
    let mut n = 0;
    let mut m = LimbBuf::from_slice(m);

    while cmp_magnitudes(&m, &POW10[POW10_TABLE_MAX]) != Ordering::Less {
        m = div_small(&m, 10000).0;
        n += 4;
    }

    n + POW10
        .iter()
        .position(|p| cmp_magnitudes(p, &m) == Ordering::Greater)
        .unwrap_or(POW10_TABLE_MAX)
}

/// Multiplies a magnitude by 10^k.
pub fn shift_left_digits(m: &[Limb], k: usize) -> LimbBuf {
    match k {
        0 => LimbBuf::from_slice(m),
        1 => mul_small(m, 10),
        _ => mul_magnitudes(m, &pow10(k)).0,
    }
}

/// Divides a magnitude by 10^k truncating the quotient, and reports removed digits.
pub fn shift_right_digits(m: &[Limb], k: usize) -> (LimbBuf, Discarded) {
    if k == 0 {
        return (LimbBuf::from_slice(m), Discarded::default());
    }

    if k > decimal_digits(m) {
        let discarded = Discarded {
            digit: 0,
            sticky: !LimbBuf::from_slice(m).is_zero(),
        };
        return (LimbBuf::new(0), discarded);
    }

    let (q, r, exact) = div_magnitudes(m, &pow10(k));
    if exact {
        return (q, Discarded::default());
    }

    let (d, rest, rest_zero) = div_magnitudes(&r, &pow10(k - 1));
    let digit = d.first().copied().unwrap_or(0) as u8;
    debug_assert!(rest_zero == rest.is_zero());

    (
        q,
        Discarded {
            digit,
            sticky: !rest_zero,
        },
    )
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(decimal_digits(&[]), 0);
        assert_eq!(decimal_digits(&[9]), 1);
        assert_eq!(decimal_digits(&[10]), 2);
        assert_eq!(decimal_digits(&LimbBuf::from_u128(u128::MAX)), 39);
        assert_eq!(decimal_digits(&LimbBuf::from_u128(10u128.pow(38) - 1)), 38);
        assert_eq!(decimal_digits(&pow10(80)), 81);
        assert_eq!(decimal_digits(&pow10(123)), 124);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift_left_digits(&[12], 3).to_u128(), Some(12000));
        assert_eq!(shift_left_digits(&[12], 0).to_u128(), Some(12));

        let m = LimbBuf::from_u128(123456);
        let (q, d) = shift_right_digits(&m, 2);
        assert_eq!(q.to_u128(), Some(1234));
        assert_eq!(d, Discarded { digit: 5, sticky: true });

        let (q, d) = shift_right_digits(&LimbBuf::from_u128(1250), 2);
        assert_eq!(q.to_u128(), Some(12));
        assert_eq!(d, Discarded { digit: 5, sticky: false });

        let (q, d) = shift_right_digits(&LimbBuf::from_u128(1203), 2);
        assert_eq!(q.to_u128(), Some(12));
        assert_eq!(d, Discarded { digit: 0, sticky: true });

        let (q, d) = shift_right_digits(&LimbBuf::from_u128(1200), 2);
        assert_eq!(q.to_u128(), Some(12));
        assert!(d.is_zero());

        // all digits removed
        let (q, d) = shift_right_digits(&LimbBuf::from_u128(7), 1);
        assert!(q.is_zero());
        assert_eq!(d, Discarded { digit: 7, sticky: false });

        let (q, d) = shift_right_digits(&LimbBuf::from_u128(7), 2);
        assert!(q.is_zero());
        assert_eq!(d, Discarded { digit: 0, sticky: true });

        let (q, d) = shift_right_digits(&[], 5);
        assert!(q.is_zero());
        assert!(d.is_zero());
    }

    #[test]
    fn test_discarded_chain() {
        let first = Discarded { digit: 3, sticky: false };
        let second = Discarded { digit: 5, sticky: false };
        assert_eq!(first.then(second), Discarded { digit: 5, sticky: true });
        assert_eq!(Discarded::default().then(second), second);
    }
}
