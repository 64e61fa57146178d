//! Static constants.

use crate::mantissa::mul_small;
use crate::mantissa::LimbBuf;
use lazy_static::lazy_static;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Largest power of ten held in the table.
pub const POW10_TABLE_MAX: usize = 80;

lazy_static! {
    /// Powers of ten from 10^0 to 10^80.
    pub static ref POW10: Vec<LimbBuf> = {
        let mut v = Vec::with_capacity(POW10_TABLE_MAX + 1);
        let mut p = LimbBuf::from_u128(1);
        for _ in 0..=POW10_TABLE_MAX {
            let next = mul_small(&p, 10);
            v.push(p);
            p = next;
        }
        v
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(POW10.len(), POW10_TABLE_MAX + 1);
        assert_eq!(POW10[0].to_u128(), Some(1));
        assert_eq!(POW10[4].to_u128(), Some(10000));
        assert_eq!(POW10[38].to_u128(), Some(10u128.pow(38)));
        assert_eq!(POW10[39].to_u128(), None);
    }
}
