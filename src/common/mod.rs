//! Items shared by the mantissa and the number.

pub mod consts;
