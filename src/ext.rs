//! Standard library traits for `Decimal`.
//! Operator traits round with `RoundingMode::Plain` and discard the status.
//! Division by zero gives NaN.

use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::mantissa::LimbBuf;
use crate::num::Decimal;

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident, $via:ident, $t:ty) => {
        impl Decimal {
            /// Constructs a number from an integer value.
            pub fn $from_s(i: $s) -> Self {
                Self::$via(i as $t)
            }
        }

        impl From<$s> for Decimal {
            fn from(i: $s) -> Self {
                Decimal::$from_s(i)
            }
        }
    };
}

impl Decimal {
    /// Constructs a number from an integer value.
    pub fn from_u128(i: u128) -> Self {
        Self::from_int(Sign::Pos, i)
    }

    /// Constructs a number from an integer value.
    pub fn from_i128(i: i128) -> Self {
        let s = if i < 0 { Sign::Neg } else { Sign::Pos };
        Self::from_int(s, i.unsigned_abs())
    }

    // any u128 fits into the mantissa
    fn from_int(s: Sign, i: u128) -> Self {
        let (ret, _) = Self::from_wide(s, &LimbBuf::from_u128(i), 0, RoundingMode::Plain, false);
        ret
    }
}

impl From<u128> for Decimal {
    fn from(i: u128) -> Self {
        Decimal::from_u128(i)
    }
}

impl From<i128> for Decimal {
    fn from(i: i128) -> Self {
        Decimal::from_i128(i)
    }
}

impl_int_conv!(i8, from_i8, from_i128, i128);
impl_int_conv!(i16, from_i16, from_i128, i128);
impl_int_conv!(i32, from_i32, from_i128, i128);
impl_int_conv!(i64, from_i64, from_i128, i128);

impl_int_conv!(u8, from_u8, from_u128, u128);
impl_int_conv!(u16, from_u16, from_u128, u128);
impl_int_conv!(u32, from_u32, from_u128, u128);
impl_int_conv!(u64, from_u64, from_u128, u128);

/// Standard library features
pub mod ops {

    use crate::defs::Error;
    use crate::defs::RoundingMode;
    use crate::num::Decimal;

    use core::{
        cmp::Ordering, cmp::PartialEq, cmp::PartialOrd, fmt::Display, fmt::Formatter, iter::Product,
        iter::Sum, ops::Add, ops::AddAssign, ops::Div, ops::DivAssign, ops::Mul, ops::MulAssign,
        ops::Neg, ops::Sub, ops::SubAssign, str::FromStr,
    };

    macro_rules! impl_arith_op {
        ($op:ident, $op_fn:ident, $op_assign:ident, $op_assign_fn:ident) => {
            impl $op for Decimal {
                type Output = Self;
                fn $op_fn(self, rhs: Self) -> Self::Output {
                    Decimal::$op_fn(&self, &rhs, RoundingMode::Plain).0
                }
            }

            impl $op<&Decimal> for Decimal {
                type Output = Self;
                fn $op_fn(self, rhs: &Decimal) -> Self::Output {
                    Decimal::$op_fn(&self, rhs, RoundingMode::Plain).0
                }
            }

            impl $op_assign for Decimal {
                fn $op_assign_fn(&mut self, rhs: Self) {
                    *self = Decimal::$op_fn(self, &rhs, RoundingMode::Plain).0
                }
            }

            impl $op_assign<&Decimal> for Decimal {
                fn $op_assign_fn(&mut self, rhs: &Decimal) {
                    *self = Decimal::$op_fn(self, rhs, RoundingMode::Plain).0
                }
            }
        };
    }

    impl_arith_op!(Add, add, AddAssign, add_assign);
    impl_arith_op!(Sub, sub, SubAssign, sub_assign);
    impl_arith_op!(Mul, mul, MulAssign, mul_assign);
    impl_arith_op!(Div, div, DivAssign, div_assign);

    impl Neg for Decimal {
        type Output = Self;
        fn neg(self) -> Self::Output {
            Decimal::neg(&self)
        }
    }

    impl Neg for &Decimal {
        type Output = Decimal;
        fn neg(self) -> Self::Output {
            Decimal::neg(self)
        }
    }

    //
    // ordering traits
    //

    impl PartialEq for Decimal {
        fn eq(&self, other: &Self) -> bool {
            matches!(self.compare(other), Some(Ordering::Equal))
        }
    }

    impl PartialOrd for Decimal {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.compare(other)
        }
    }

    impl Display for Decimal {
        /// Formats the number in positional notation.
        /// Precision, if specified, is the number of digits after the decimal point the number is rounded to.
        fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
            match f.precision() {
                Some(p) => {
                    let scale = p.min(i16::MAX as usize - 1) as i16;
                    let (d, _) = self.round(scale, RoundingMode::Plain);
                    // pad() would treat precision as the maximum width
                    f.write_str(&d.to_string_with(None))
                }
                None => f.pad(&self.to_string_with(None)),
            }
        }
    }

    impl FromStr for Decimal {
        type Err = Error;

        /// Returns the parsed number or an error if the string is not a number.
        fn from_str(src: &str) -> Result<Decimal, Self::Err> {
            Decimal::parse(src).ok_or(Error::InvalidArgument)
        }
    }

    impl Product for Decimal {
        fn product<I: Iterator<Item = Decimal>>(iter: I) -> Self {
            let mut acc = Decimal::ONE;
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl Sum for Decimal {
        fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
            let mut acc = Decimal::ZERO;
            for v in iter {
                acc += v;
            }
            acc
        }
    }

    impl<'a> Product<&'a Decimal> for Decimal {
        fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
            let mut acc = Decimal::ONE;
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl<'a> Sum<&'a Decimal> for Decimal {
        fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
            let mut acc = Decimal::ZERO;
            for v in iter {
                acc += v;
            }
            acc
        }
    }
}
