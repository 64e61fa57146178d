//! Division of magnitudes.

use super::significant_len;
use super::LimbBuf;
use crate::defs::DoubleLimb;
use crate::defs::Limb;
use crate::defs::LIMB_BASE;
use crate::defs::LIMB_BIT_SIZE;

/// Divides a magnitude by a single nonzero limb. Returns the quotient and the remainder.
pub fn div_small(a: &[Limb], d: Limb) -> (LimbBuf, Limb) {
    debug_assert!(d != 0);

    let a = &a[..significant_len(a)];
    let mut q = LimbBuf::new(a.len());
    let mut r: DoubleLimb = 0;

    for (qd, x) in q.iter_mut().rev().zip(a.iter().rev()) {
        let v = (r << LIMB_BIT_SIZE) | *x as DoubleLimb;
        *qd = (v / d as DoubleLimb) as Limb;
        r = v % d as DoubleLimb;
    }

    q.trunc_leading_zeroes();
    (q, r as Limb)
}

/// Divides `a` by nonzero `b` using Knuth's algorithm D.
/// Returns the quotient, the remainder, and true if the remainder is zero.
pub fn div_magnitudes(a: &[Limb], b: &[Limb]) -> (LimbBuf, LimbBuf, bool) {
    let m = significant_len(a);
    let n = significant_len(b);

    debug_assert!(n > 0);

    if m < n {
        let r = LimbBuf::from_slice(a);
        let exact = r.is_zero();
        return (LimbBuf::new(0), r, exact);
    }

    if n == 1 {
        let (q, r) = div_small(a, b[0]);
        let r = LimbBuf::from_slice(&[r]);
        let exact = r.is_zero();
        return (q, r, exact);
    }

    // normalize: the most significant limb of the divisor gets its top bit set
    let s = b[n - 1].leading_zeros() as usize;
    let mut vn = LimbBuf::new(n);
    for i in (1..n).rev() {
        vn[i] = ((b[i] as DoubleLimb) << s | (b[i - 1] as DoubleLimb) >> (LIMB_BIT_SIZE - s)) as Limb;
    }
    vn[0] = ((b[0] as DoubleLimb) << s) as Limb;

    let mut un = LimbBuf::new(m + 1);
    un[m] = ((a[m - 1] as DoubleLimb) >> (LIMB_BIT_SIZE - s)) as Limb;
    for i in (1..m).rev() {
        un[i] = ((a[i] as DoubleLimb) << s | (a[i - 1] as DoubleLimb) >> (LIMB_BIT_SIZE - s)) as Limb;
    }
    un[0] = ((a[0] as DoubleLimb) << s) as Limb;

    let base = LIMB_BASE as u64;
    let vh = vn[n - 1] as u64;
    let vl = vn[n - 2] as u64;
    let mut q = LimbBuf::new(m - n + 1);

    for j in (0..=m - n).rev() {
        // estimate quotient digit
        let num = ((un[j + n] as u64) << LIMB_BIT_SIZE) | un[j + n - 1] as u64;
        let mut qhat = num / vh;
        let mut rhat = num % vh;

        while qhat >= base || qhat * vl > ((rhat << LIMB_BIT_SIZE) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += vh;
            if rhat >= base {
                break;
            }
        }

        // multiply and subtract
        let mut borrow: i64 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as u64;
            let t = un[i + j] as i64 - borrow - (p & 0xFFFF) as i64;
            un[i + j] = t as Limb;
            borrow = (p >> LIMB_BIT_SIZE) as i64 - (t >> LIMB_BIT_SIZE);
        }
        let t = un[j + n] as i64 - borrow;
        un[j + n] = t as Limb;

        if t < 0 {
            // estimate was one too large, add back
            qhat -= 1;
            let mut c: DoubleLimb = 0;
            for i in 0..n {
                let v = un[i + j] as DoubleLimb + vn[i] as DoubleLimb + c;
                un[i + j] = v as Limb;
                c = v >> LIMB_BIT_SIZE;
            }
            un[j + n] = un[j + n].wrapping_add(c as Limb);
        }

        q[j] = qhat as Limb;
    }

    // denormalize remainder
    let mut r = LimbBuf::new(n);
    for i in 0..n {
        r[i] = ((un[i] as DoubleLimb) >> s | (un[i + 1] as DoubleLimb) << (LIMB_BIT_SIZE - s)) as Limb;
    }

    q.trunc_leading_zeroes();
    r.trunc_leading_zeroes();
    let exact = r.is_zero();

    (q, r, exact)
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_div_small() {
        let (q, r) = div_small(&LimbBuf::from_u128(1_000_000_007), 10);
        assert_eq!(q.to_u128(), Some(100_000_000));
        assert_eq!(r, 7);

        let (q, r) = div_small(&[], 3);
        assert!(q.is_zero());
        assert_eq!(r, 0);
    }

    #[test]
    fn test_div() {
        let (q, r, exact) = div_magnitudes(&[5], &[0, 1]);
        assert!(q.is_zero());
        assert_eq!(&r[..], &[5]);
        assert!(!exact);

        let (q, r, exact) = div_magnitudes(&LimbBuf::from_u128(1 << 64), &LimbBuf::from_u128(1 << 32));
        assert_eq!(q.to_u128(), Some(1 << 32));
        assert!(r.is_zero());
        assert!(exact);

        let a = LimbBuf::from_u128(u128::MAX);
        let b = LimbBuf::from_u128(0x8000_0000_0000_0001);
        let (q, r, exact) = div_magnitudes(&a, &b);
        assert_eq!(q.to_u128(), Some(u128::MAX / 0x8000_0000_0000_0001));
        assert_eq!(r.to_u128(), Some(u128::MAX % 0x8000_0000_0000_0001));
        assert!(!exact);

        for _ in 0..10000 {
            let x: u128 = random::<u128>() >> (random::<u32>() % 128);
            let y: u128 = (random::<u128>() >> (random::<u32>() % 128)).max(1);
            let (q, r, exact) = div_magnitudes(&LimbBuf::from_u128(x), &LimbBuf::from_u128(y));
            assert_eq!(q.to_u128(), Some(x / y));
            assert_eq!(r.to_u128(), Some(x % y));
            assert_eq!(exact, x % y == 0);
        }
    }

    #[test]
    fn test_div_wide() {
        // (x * y + z) / y where x * y needs more than 128 bits
        for _ in 0..1000 {
            let x = random::<u128>() | 1;
            let y = (random::<u128>() >> (random::<u32>() % 100)) | 2;
            let z = random::<u128>() % y;
            let (p, _) = super::super::mul_magnitudes(&LimbBuf::from_u128(x), &LimbBuf::from_u128(y));
            let (p, _) = super::super::add_magnitudes(&p, &LimbBuf::from_u128(z));
            let (q, r, exact) = div_magnitudes(&p, &LimbBuf::from_u128(y));
            assert_eq!(q.to_u128(), Some(x));
            assert_eq!(r.to_u128(), Some(z));
            assert_eq!(exact, z == 0);
        }
    }
}
