//! This test suite checks algebraic properties of decimal arithmetic on random inputs.

use std::cmp::Ordering;

use compact_decimal::{
    Bindings, CompoundKind, CompoundPredicate, ConstantPredicate, Decimal, Predicate, RoundingMode, Sign,
    Status, EXPONENT_MAX, EXPONENT_MIN,
};
use rand::random;

const MODES: [RoundingMode; 4] = [
    RoundingMode::Plain,
    RoundingMode::Down,
    RoundingMode::Up,
    RoundingMode::Bankers,
];

fn num(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn random_decimal(exp_from: i32, exp_to: i32) -> Decimal {
    match random::<u8>() % 16 {
        0 => Decimal::ZERO,
        1 => {
            // short mantissa
            let m = random::<u32>() as u128;
            let e = exp_from + (random::<u32>() % (exp_to - exp_from + 1) as u32) as i32;
            let s = if random::<bool>() { Sign::Pos } else { Sign::Neg };
            Decimal::from_parts(s, m, e).unwrap()
        }
        _ => Decimal::random_normal(exp_from, exp_to).unwrap(),
    }
}

fn assert_equal(d1: &Decimal, d2: &Decimal) {
    assert_eq!(d1.compare(d2), Some(Ordering::Equal), "{} != {}", d1, d2);
}

#[test]
fn compare_is_antisymmetric() {
    for _ in 0..10000 {
        let d1 = random_decimal(EXPONENT_MIN, EXPONENT_MAX);
        let d2 = random_decimal(EXPONENT_MIN, EXPONENT_MAX);

        let c1 = d1.compare(&d2).unwrap();
        let c2 = d2.compare(&d1).unwrap();
        assert_eq!(c1, c2.reverse());
        assert_eq!(d1.compare(&d1), Some(Ordering::Equal));
    }

    assert_eq!(Decimal::NAN.compare(&Decimal::NAN), None);
    assert_eq!(Decimal::NAN.compare(&Decimal::ONE), None);
}

#[test]
fn string_round_trip() {
    for _ in 0..10000 {
        let d1 = random_decimal(EXPONENT_MIN, EXPONENT_MAX);
        let s = d1.to_string();
        let d2: Decimal = s.parse().unwrap();
        assert_equal(&d1, &d2);
    }
}

#[test]
fn round_is_idempotent() {
    for _ in 0..10000 {
        let d1 = random_decimal(-30, 10);
        let scale = (random::<u8>() % 80) as i16 - 20;

        for rm in MODES {
            let (r1, _) = d1.round(scale, rm);
            let (r2, st) = r1.round(scale, rm);
            assert_eq!(st, Status::NoError);
            assert_equal(&r1, &r2);
        }
    }
}

#[test]
fn add_then_sub_recovers() {
    let mut exact = 0;
    for _ in 0..10000 {
        let d1 = random_decimal(-20, 20);
        let d2 = random_decimal(-20, 20);
        let rm = MODES[random::<usize>() % MODES.len()];

        let (d3, st) = d1.add(&d2, rm);
        if st == Status::NoError {
            exact += 1;
            let (d4, _) = d3.sub(&d2, rm);
            assert_equal(&d4, &d1);
        }
    }

    assert!(exact > 0);
}

#[test]
fn far_operand_rounds_directed() {
    let big = num("1e47");
    let tiny = num("0.001");

    let (d, st) = big.sub(&tiny, RoundingMode::Down);
    assert_eq!(st, Status::LossOfPrecision);
    assert_eq!(d.compare(&big), Some(Ordering::Less));

    let (d, _) = big.add(&tiny, RoundingMode::Up);
    assert_eq!(d.compare(&big), Some(Ordering::Greater));

    for rm in [RoundingMode::Plain, RoundingMode::Bankers] {
        let (d, _) = big.sub(&tiny, rm);
        assert_equal(&d, &big);
    }
}

#[test]
fn pow10_round_trip() {
    for _ in 0..10000 {
        let d1 = random_decimal(EXPONENT_MIN, EXPONENT_MAX);
        let k = (random::<u16>() % 600) as i16 - 300;

        let (d2, st1) = d1.mul_pow10(k, RoundingMode::Plain);
        let (d3, st2) = d2.mul_pow10(-k, RoundingMode::Plain);

        if st1 == Status::NoError && st2 == Status::NoError {
            assert_equal(&d3, &d1);
        }
    }
}

#[test]
fn bankers_rounding() {
    let cases = [("1.25", "1.2"), ("1.35", "1.4"), ("1.21", "1.2"), ("1.27", "1.3"), ("-1.25", "-1.2")];

    for (input, expected) in cases {
        let (d, st) = num(input).round(1, RoundingMode::Bankers);
        assert_eq!(st, Status::LossOfPrecision);
        assert_equal(&d, &num(expected));
    }

    // non-tie cases agree with plain rounding
    for _ in 0..10000 {
        let m = (random::<u32>() % 100_000) as u128;
        let d1 = Decimal::from_parts(Sign::Neg, m, -3).unwrap();

        let (b, _) = d1.round(2, RoundingMode::Bankers);
        let (p, _) = d1.round(2, RoundingMode::Plain);
        if m % 10 != 5 {
            assert_equal(&b, &p);
        }
    }
}

#[test]
fn divide_by_zero() {
    let zeros = [Decimal::ZERO, num("-0"), num("0e10"), num("0.000")];

    for _ in 0..1000 {
        let d1 = random_decimal(EXPONENT_MIN, EXPONENT_MAX);
        for z in &zeros {
            for rm in MODES {
                let (q, st) = d1.div(z, rm);
                assert_eq!(st, Status::DivideByZero);
                assert!(q.is_nan());
            }
        }
    }
}

#[test]
fn predicate_folds() {
    let b = Bindings::new();
    let d = Decimal::ONE;

    assert!(CompoundPredicate::<Decimal>::try_new(CompoundKind::Not, vec![]).is_err());
    assert!(CompoundPredicate::<Decimal>::and(vec![]).evaluate(&d, &b));
    assert!(!CompoundPredicate::<Decimal>::or(vec![]).evaluate(&d, &b));

    for _ in 0..100 {
        let v = random::<bool>();
        for kind in [CompoundKind::And, CompoundKind::Or] {
            let p = CompoundPredicate::<Decimal>::new(kind, vec![Box::new(ConstantPredicate(v))]);
            assert_eq!(p.evaluate(&d, &b), v);
        }
    }
}
