//! Conversion of numbers to and from strings.

use crate::defs::Limb;
use crate::defs::RoundingMode;
use crate::defs::Status;
use crate::defs::MAX_DIGITS;
use crate::mantissa::add_small;
use crate::mantissa::mul_small;
use crate::mantissa::LimbBuf;
use crate::num::Decimal;
use crate::parser::parse;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Formatting hint: the decimal separator and the grouping of integer digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Character separating integer and fractional parts.
    pub decimal_separator: char,

    /// Character separating groups of integer digits, no grouping if `None`.
    pub grouping_separator: Option<char>,

    /// Number of digits in a group. Zero disables grouping.
    pub grouping_size: usize,
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            decimal_separator: '.',
            grouping_separator: None,
            grouping_size: 3,
        }
    }
}

impl Decimal {
    /// Parses a number from the string `s`.
    /// The string may contain an optional sign, digits with an optional decimal point,
    /// and an optional exponent, e.g. `-12.5e-3`. `NaN` in any letter case is also accepted.
    /// Digits which do not fit into the mantissa are rounded half away from zero.
    /// Numbers too small to be represented become zero.
    ///
    /// Returns `None` if the string is not a number, or the number is too large.
    pub fn parse(s: &str) -> Option<Self> {
        let ps = parse(s);

        if !ps.is_valid() {
            return None;
        }

        if ps.is_nan() {
            return Some(Self::NAN);
        }

        let (digits, s, e) = ps.raw_parts();

        // the rest only matters for rounding
        let keep = digits.len().min(MAX_DIGITS + 2);
        let mut m = LimbBuf::new(0);
        for d in &digits[..keep] {
            m = add_small(&mul_small(&m, 10), *d as Limb);
        }
        let inexact = digits[keep..].iter().any(|d| *d != 0);
        let e = e.saturating_add((digits.len() - keep) as i64);

        let (ret, status) = Self::from_wide(s, &m, e, RoundingMode::Plain, inexact);

        if status == Status::Overflow {
            None
        } else {
            Some(ret)
        }
    }

    /// Formats the number in positional notation using the separators of `locale`.
    /// Without a locale the decimal separator is `.` and digits are not grouped.
    pub fn to_string_with(&self, locale: Option<&Locale>) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }

        if self.is_zero() {
            return "0".to_string();
        }

        let default_locale = Locale::default();
        let locale = locale.unwrap_or(&default_locale);

        let digits = self.mantissa_u128().to_string();
        let e = self.exponent();

        let (int, frac) = if e >= 0 {
            let mut int = digits;
            int.extend(core::iter::repeat('0').take(e as usize));
            (int, String::new())
        } else {
            let frac_len = e.unsigned_abs() as usize;
            if frac_len >= digits.len() {
                let mut frac: String = core::iter::repeat('0').take(frac_len - digits.len()).collect();
                frac.push_str(&digits);
                ("0".to_string(), frac)
            } else {
                let (i, f) = digits.split_at(digits.len() - frac_len);
                (i.to_string(), f.to_string())
            }
        };

        let mut ret = String::new();
        if self.is_negative() {
            ret.push('-');
        }

        match locale.grouping_separator {
            Some(sep) if locale.grouping_size > 0 => {
                let n = int.len();
                for (i, c) in int.chars().enumerate() {
                    if i > 0 && (n - i) % locale.grouping_size == 0 {
                        ret.push(sep);
                    }
                    ret.push(c);
                }
            }
            _ => ret.push_str(&int),
        }

        if !frac.is_empty() {
            ret.push(locale.decimal_separator);
            ret.push_str(&frac);
        }

        ret
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;
    use crate::defs::EXPONENT_MAX;
    use crate::defs::EXPONENT_MIN;
    use core::cmp::Ordering;

    #[test]
    fn test_format() {
        let cases = [
            ("0", "0"),
            ("-0.000", "0"),
            ("1", "1"),
            ("-1.5", "-1.5"),
            ("0.0015", "0.0015"),
            ("1200", "1200"),
            ("12.34e3", "12340"),
            ("-12.34e-5", "-0.0001234"),
            ("100.100", "100.1"),
            ("nan", "NaN"),
        ];

        for (input, expected) in cases {
            assert_eq!(Decimal::parse(input).unwrap().to_string_with(None), expected);
        }

        let d1 = Decimal::from_parts(Sign::Pos, 15, EXPONENT_MIN).unwrap();
        let s = d1.to_string_with(None);
        assert_eq!(s.len(), 2 + 128);
        assert!(s.starts_with("0.000"));
        assert!(s.ends_with("015"));

        let s = Decimal::MAX.to_string_with(None);
        assert_eq!(s.len(), 39 + 127);
    }

    #[test]
    fn test_format_locale() {
        let locale = Locale {
            decimal_separator: ',',
            grouping_separator: Some(' '),
            grouping_size: 3,
        };

        let d1 = Decimal::parse("-1234567.891").unwrap();
        assert_eq!(d1.to_string_with(Some(&locale)), "-1 234 567,891");
        assert_eq!(d1.to_string_with(Some(&Locale::default())), "-1234567.891");
        assert_eq!(d1.to_string_with(None), "-1234567.891");

        assert_eq!(Decimal::parse("123").unwrap().to_string_with(Some(&locale)), "123");
        assert_eq!(Decimal::parse("1234").unwrap().to_string_with(Some(&locale)), "1 234");
        assert_eq!(Decimal::parse("0.5").unwrap().to_string_with(Some(&locale)), "0,5");

        let locale = Locale {
            decimal_separator: '.',
            grouping_separator: Some(','),
            grouping_size: 0,
        };
        assert_eq!(Decimal::parse("1234").unwrap().to_string_with(Some(&locale)), "1234");

        let locale = Locale {
            decimal_separator: '.',
            grouping_separator: Some('\''),
            grouping_size: 4,
        };
        assert_eq!(Decimal::parse("123456789").unwrap().to_string_with(Some(&locale)), "1'2345'6789");
    }

    #[test]
    fn test_parse() {
        let d1 = Decimal::parse("-12.50").unwrap();
        assert!(d1.is_negative());
        assert_eq!(d1.mantissa_u128(), 125);
        assert_eq!(d1.exponent(), -1);
        assert!(d1.is_compact());

        assert!(Decimal::parse("NaN").unwrap().is_nan());
        assert!(Decimal::parse("-0").unwrap().is_zero());
        assert!(Decimal::parse("").is_none());
        assert!(Decimal::parse("1,5").is_none());

        // digits beyond the mantissa are rounded
        let d1 = Decimal::parse("1234567890123456789012345678901234567890123").unwrap();
        assert_eq!(d1.mantissa_u128(), 123456789012345678901234567890123456789);
        assert_eq!(d1.exponent(), 4);

        let d1 = Decimal::parse("0.99999999999999999999999999999999999999999999").unwrap();
        assert!(d1.compare(&Decimal::ONE) == Some(Ordering::Equal));

        let d1 = Decimal::parse("1.000000000000000000000000000000000000000000001").unwrap();
        assert!(d1.compare(&Decimal::ONE) == Some(Ordering::Equal));

        // exponent range
        let d1 = Decimal::parse("1e127").unwrap();
        assert_eq!(d1.exponent(), EXPONENT_MAX);
        let d1 = Decimal::parse("1e130").unwrap();
        assert_eq!(d1.mantissa_u128(), 1000);
        assert!(Decimal::parse("1e200").is_none());
        assert!(Decimal::parse("-1e99999999999999").is_none());
        assert!(Decimal::parse("1e-200").unwrap().is_zero());
        assert!(Decimal::parse("1e-99999999999999").unwrap().is_zero());
        assert!(Decimal::parse("0e999").unwrap().is_zero());

        let d1 = Decimal::parse("0.5e-128").unwrap();
        assert!(d1.compare(&Decimal::MIN_POSITIVE) == Some(Ordering::Equal));
    }

    #[test]
    fn test_round_trip() {
        for _ in 0..10000 {
            let d1 = Decimal::random_normal(EXPONENT_MIN, EXPONENT_MAX).unwrap();
            let s = d1.to_string_with(None);
            let d2 = Decimal::parse(&s).unwrap();
            assert!(d1.compare(&d2) == Some(Ordering::Equal), "{}", s);
        }

        let locale = Locale {
            decimal_separator: '.',
            grouping_separator: Some('_'),
            grouping_size: 3,
        };
        for _ in 0..1000 {
            let d1 = Decimal::random_normal(-20, 20).unwrap();
            let s = d1.to_string_with(Some(&locale)).replace('_', "");
            let d2 = Decimal::parse(&s).unwrap();
            assert!(d1.compare(&d2) == Some(Ordering::Equal));
            assert!(d2.is_compact());
        }
    }
}
