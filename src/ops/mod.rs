//! Arithmetic on decimal numbers.
//!
//! Every operation returns a new number together with the status of the operation.
//! Results which do not fit are rounded with the given rounding mode.

mod add;
mod mul;
mod other;
mod pow;
