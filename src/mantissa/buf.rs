//! Buffer for holding intermediate mantissa limbs.

use crate::defs::Limb;
use crate::defs::MAX_LIMBS;
use core::ops::Deref;
use core::ops::DerefMut;
use smallvec::SmallVec;

// products and scaled dividends stay within this size
const STATIC_ALLOCATION: usize = MAX_LIMBS * 2 + 2;

/// Buffer for holding mantissa limbs, least significant limb first.
/// Intermediate results may be wider than the mantissa of a number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LimbBuf {
    inner: SmallVec<[Limb; STATIC_ALLOCATION]>,
}

impl LimbBuf {
    /// New buffer of `sz` limbs filled with zeroes.
    #[inline]
    pub fn new(sz: usize) -> Self {
        let mut inner = SmallVec::new();
        inner.resize(sz, 0);
        LimbBuf { inner }
    }

    /// New buffer holding a copy of the limbs `m` without leading zero limbs.
    pub fn from_slice(m: &[Limb]) -> Self {
        let mut ret = LimbBuf {
            inner: SmallVec::from_slice(m),
        };
        ret.trunc_leading_zeroes();
        ret
    }

    /// New buffer holding `v`.
    pub fn from_u128(mut v: u128) -> Self {
        let mut ret = LimbBuf::new(0);
        while v > 0 {
            ret.inner.push(v as Limb);
            v >>= Limb::BITS;
        }
        ret
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the buffer represents zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inner.iter().all(|v| *v == 0)
    }

    /// Remove leading limbs containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) {
        let n = self.inner.iter().rev().take_while(|v| **v == 0).count();
        let sz = self.len();
        self.inner.truncate(sz - n);
    }

    /// Returns true if the value fits in the mantissa of a number.
    #[inline]
    pub fn fits(&self) -> bool {
        super::significant_len(&self.inner) <= MAX_LIMBS
    }

    /// Returns the value as an integer, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.fits() {
            Some(
                self.inner
                    .iter()
                    .rev()
                    .fold(0u128, |acc, d| (acc << Limb::BITS) | *d as u128),
            )
        } else {
            None
        }
    }
}

impl Deref for LimbBuf {
    type Target = [Limb];

    #[inline]
    fn deref(&self) -> &[Limb] {
        self.inner.deref()
    }
}

impl DerefMut for LimbBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Limb] {
        self.inner.deref_mut()
    }
}
