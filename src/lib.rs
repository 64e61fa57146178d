//! Compact-decimal is a library of fixed-size decimal floating point numbers.
//!
//! A number is a sign, an integer mantissa of up to 128 bits, and a decimal exponent:
//! the value is `mantissa * 10^exponent`.
//!
//! Characteristics:
//!
//! | Name                          | Value  |
//! |:------------------------------|-------:|
//! | Decimal positions in mantissa |     38 |
//! | Exponent minimum value        |   -128 |
//! | Exponent maximum value        |    127 |
//!
//! Arithmetic returns the result together with a [`Status`] which tells whether the result is exact,
//! was rounded, or fell out of range. Rounding is controlled with [`RoundingMode`] on every call.
//!
//! ``` rust
//! use compact_decimal::{Decimal, RoundingMode, Status};
//!
//! let price = Decimal::parse("19.99").unwrap();
//! let qty = Decimal::from(3);
//!
//! let (total, status) = price.mul(&qty, RoundingMode::Plain);
//! assert_eq!(status, Status::NoError);
//! assert_eq!(total.to_string_with(None), "59.97");
//!
//! let (third, status) = Decimal::ONE.div(&qty, RoundingMode::Plain);
//! assert_eq!(status, Status::LossOfPrecision);
//!
//! let (rounded, _) = third.round(2, RoundingMode::Bankers);
//! assert_eq!(rounded.to_string_with(None), "0.33");
//! ```
//!
//! The library can be used without the standard library by disabling the default `std` feature.
//! The predicate combinator and the host resolver require `std`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod defs;
mod ext;
mod mantissa;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

#[cfg(feature = "std")]
pub mod host;

#[cfg(feature = "std")]
pub mod predicate;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Limb;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::Status;
pub use crate::num::Decimal;
pub use crate::strop::Locale;

pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::MAX_DIGITS;
pub use crate::defs::MAX_LIMBS;
pub use crate::defs::NO_SCALE;

#[cfg(feature = "std")]
pub use crate::host::{Host, Resolver, SystemResolver};

#[cfg(feature = "std")]
pub use crate::predicate::{
    Bindings, ComparisonOperator, CompoundKind, CompoundPredicate, ConstantPredicate,
    DecimalComparison, Operand, Predicate,
};
