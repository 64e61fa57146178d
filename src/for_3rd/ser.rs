//! Serialization of Decimal.
//! A number is serialized as a string in positional notation.

use crate::num::Decimal;
use serde::{Serialize, Serializer};

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_with(None))
    }
}
