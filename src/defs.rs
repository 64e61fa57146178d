//! Definitions.

use core::fmt::Display;
use core::fmt::Formatter;

/// A limb of the mantissa.
pub type Limb = u16;

/// Doubled limb.
pub type DoubleLimb = u32;

/// An exponent.
pub type Exponent = i32;

/// Maximum number of limbs in a mantissa.
pub const MAX_LIMBS: usize = 8;

/// Number of decimal digits any mantissa within the limb budget can hold.
pub const MAX_DIGITS: usize = 38;

/// Size of a limb in bits.
pub const LIMB_BIT_SIZE: usize = core::mem::size_of::<Limb>() * 8;

/// Base of limbs.
pub const LIMB_BASE: DoubleLimb = Limb::MAX as DoubleLimb + 1;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = 127;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = -128;

/// Scale value which disables rounding.
pub const NO_SCALE: i16 = i16::MAX;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Neg = -1,
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }
}

/// Rounding modes.
///
/// | Value   | 1.2 | 1.21 | 1.25 | 1.35 | 1.27 |
/// |:--------|----:|-----:|-----:|-----:|-----:|
/// | Plain   | 1.2 |  1.2 |  1.3 |  1.4 |  1.3 |
/// | Down    | 1.2 |  1.2 |  1.2 |  1.3 |  1.2 |
/// | Up      | 1.2 |  1.3 |  1.3 |  1.4 |  1.3 |
/// | Bankers | 1.2 |  1.2 |  1.2 |  1.4 |  1.3 |
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default)]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    Plain,

    /// Truncate toward zero.
    Down,

    /// Round away from zero if any discarded digit is nonzero.
    Up,

    /// Round half to even.
    Bankers,
}

impl RoundingMode {
    /// Decides whether the kept magnitude must be incremented by one unit.
    /// `digit` is the most significant discarded digit, `sticky` tells whether any less significant
    /// discarded digit is nonzero, and `odd` is the parity of the last kept digit.
    pub(crate) fn round_up(&self, digit: u8, sticky: bool, odd: bool) -> bool {
        match self {
            RoundingMode::Plain => digit >= 5,
            RoundingMode::Down => false,
            RoundingMode::Up => digit > 0 || sticky,
            RoundingMode::Bankers => digit > 5 || (digit == 5 && (sticky || odd)),
        }
    }
}

/// Status of an arithmetic operation.
/// Variants are ordered by severity: `NoError` is the least severe, `DivideByZero` the most.
#[must_use]
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub enum Status {
    /// The result is exact.
    #[default]
    NoError,

    /// The result lost precision.
    LossOfPrecision,

    /// The result became zero or lost digits because the exponent is too small.
    Underflow,

    /// The result exceeds the possible representation.
    Overflow,

    /// The divisor is zero, the result is not a number.
    DivideByZero,
}

impl Status {
    /// Returns the more severe of two statuses.
    pub fn worst(self, other: Status) -> Status {
        core::cmp::max(self, other)
    }

    /// Returns true if the result is exact.
    pub fn is_ok(&self) -> bool {
        *self == Status::NoError
    }

    /// Returns true if the status must stop a chain of computations.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Status::Overflow | Status::DivideByZero)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Status::NoError => write!(f, "no error"),
            Status::LossOfPrecision => write!(f, "loss of precision"),
            Status::Underflow => write!(f, "underflow: result is too small"),
            Status::Overflow => write!(f, "overflow: result exceeds possible representation"),
            Status::DivideByZero => write!(f, "division by zero"),
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument.
    InvalidArgument,

    /// Host lookup failed.
    #[cfg(feature = "std")]
    Resolution(std::io::ErrorKind),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "invalid argument"),
            #[cfg(feature = "std")]
            Error::Resolution(kind) => write!(f, "host resolution failed: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
