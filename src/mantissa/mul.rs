//! Multiplication of magnitudes.

use super::significant_len;
use super::LimbBuf;
use crate::defs::DoubleLimb;
use crate::defs::Limb;
use crate::defs::LIMB_BIT_SIZE;
use crate::defs::MAX_LIMBS;

/// Multiplies two magnitudes using the schoolbook method.
/// The returned flag is set if the product needs more than `MAX_LIMBS` limbs.
pub fn mul_magnitudes(a: &[Limb], b: &[Limb]) -> (LimbBuf, bool) {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];

    let mut ret = LimbBuf::new(a.len() + b.len());

    for (i, x) in a.iter().enumerate() {
        if *x == 0 {
            continue;
        }

        let mut k: DoubleLimb = 0;
        for (j, y) in b.iter().enumerate() {
            // x*y + r + k < base^2
            let m = *x as DoubleLimb * *y as DoubleLimb + ret[i + j] as DoubleLimb + k;
            ret[i + j] = m as Limb;
            k = m >> LIMB_BIT_SIZE;
        }
        ret[i + b.len()] = k as Limb;
    }

    ret.trunc_leading_zeroes();

    let overflow = ret.len() > MAX_LIMBS;
    (ret, overflow)
}

/// Multiplies a magnitude by a single limb.
pub fn mul_small(a: &[Limb], d: Limb) -> LimbBuf {
    let a = &a[..significant_len(a)];
    let mut ret = LimbBuf::new(a.len() + 1);
    let mut k: DoubleLimb = 0;

    for (r, x) in ret.iter_mut().zip(a.iter()) {
        let m = *x as DoubleLimb * d as DoubleLimb + k;
        *r = m as Limb;
        k = m >> LIMB_BIT_SIZE;
    }

    let l = ret.len();
    ret[l - 1] = k as Limb;
    ret.trunc_leading_zeroes();
    ret
}
