//! Everything related to mantissa.
//!
//! Unsigned arithmetic on limb slices. Limbs are stored least significant first.
//! Inputs may contain leading zero limbs; outputs never do.

mod add;
mod buf;
mod div;
mod mul;
mod util;

use crate::defs::Limb;

pub use add::add_magnitudes;
pub use add::add_small;
pub use add::cmp_magnitudes;
pub use add::sub_magnitudes;
pub use buf::LimbBuf;
pub use div::div_magnitudes;
pub use div::div_small;
pub use mul::mul_magnitudes;
pub use mul::mul_small;
pub use util::decimal_digits;
pub use util::shift_left_digits;
pub use util::shift_right_digits;
pub use util::Discarded;

/// Number of limbs excluding leading zero limbs.
#[inline]
pub fn significant_len(m: &[Limb]) -> usize {
    m.iter().rposition(|v| *v != 0).map_or(0, |p| p + 1)
}
