//! Addition, subtraction and comparison of magnitudes.

use super::significant_len;
use super::LimbBuf;
use crate::defs::DoubleLimb;
use crate::defs::Limb;
use crate::defs::LIMB_BIT_SIZE;
use crate::defs::MAX_LIMBS;
use core::cmp::Ordering;
use itertools::izip;

/// Compares two magnitudes.
/// Limb counts are compared first ignoring leading zero limbs, then limbs from the most significant.
pub fn cmp_magnitudes(a: &[Limb], b: &[Limb]) -> Ordering {
    let la = significant_len(a);
    let lb = significant_len(b);

    if la != lb {
        return la.cmp(&lb);
    }

    for (x, y) in a[..la].iter().rev().zip(b[..lb].iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }

    Ordering::Equal
}

/// Adds two magnitudes. The returned flag is set if the sum needs more than `MAX_LIMBS` limbs.
pub fn add_magnitudes(a: &[Limb], b: &[Limb]) -> (LimbBuf, bool) {
    let (long, short) = if significant_len(a) >= significant_len(b) {
        (&a[..significant_len(a)], &b[..significant_len(b)])
    } else {
        (&b[..significant_len(b)], &a[..significant_len(a)])
    };

    let mut ret = LimbBuf::new(long.len() + 1);
    let mut c: DoubleLimb = 0;

    for (d, x, y) in izip!(ret.iter_mut(), long.iter(), short.iter()) {
        let s = *x as DoubleLimb + *y as DoubleLimb + c;
        *d = s as Limb;
        c = s >> LIMB_BIT_SIZE;
    }

    for (d, x) in ret[short.len()..].iter_mut().zip(long[short.len()..].iter()) {
        let s = *x as DoubleLimb + c;
        *d = s as Limb;
        c = s >> LIMB_BIT_SIZE;
    }

    let l = ret.len();
    ret[l - 1] = c as Limb;
    ret.trunc_leading_zeroes();

    let overflow = ret.len() > MAX_LIMBS;
    (ret, overflow)
}

/// Subtracts `b` from `a`. `a` must not be less than `b`.
pub fn sub_magnitudes(a: &[Limb], b: &[Limb]) -> LimbBuf {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);

    let la = significant_len(a);
    let lb = significant_len(b);
    let mut ret = LimbBuf::new(la);
    let mut borrow: Limb = 0;

    for (i, d) in ret.iter_mut().enumerate() {
        let y = if i < lb { b[i] } else { 0 };
        let (s1, o1) = a[i].overflowing_sub(y);
        let (s2, o2) = s1.overflowing_sub(borrow);
        *d = s2;
        borrow = (o1 || o2) as Limb;
    }

    debug_assert!(borrow == 0);

    ret.trunc_leading_zeroes();
    ret
}

/// Adds a small value to a magnitude.
pub fn add_small(a: &[Limb], v: Limb) -> LimbBuf {
    let (ret, _) = add_magnitudes(a, &[v]);
    ret
}
