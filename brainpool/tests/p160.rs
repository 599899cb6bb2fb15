//! brainpoolP160t1 and brainpoolP160r1 tests.

use hex_literal::hex;
use proptest::prelude::*;
use weierstrass::{BigUint, Curve, EquationA, PrimeCurve};

mod t1 {
    weierstrass::impl_curve_tests!(brainpool::p160t1());
}

mod r1 {
    weierstrass::impl_curve_tests!(brainpool::p160r1());
}

/// Published coefficients and base point of brainpoolP160r1.
const R1_A: &[u8] = &hex!("340e7be2a280eb74e2be61bada745d97e8f7c300");
const R1_B: &[u8] = &hex!("1e589a8595423412134faa2dbdec95c8d8675e58");
const R1_GX: &[u8] = &hex!("bed5af16ea3f6a4f62938c4631eb5af7bdbcdbc3");
const R1_GY: &[u8] = &hex!("1667cb477a1a8ec338f94741669c976316da6321");

/// Isomorphism constant `Z` from RFC 5639 §3.1.
const Z: &[u8] = &hex!("24dbff5dec9b986bbfe5295a29bfbae45e0f5d0b");

/// brainpoolP160r1 evaluated directly from its equation.
fn native_r1() -> PrimeCurve {
    let t1 = brainpool::p160t1();
    let field = t1.field();

    PrimeCurve::new(
        "brainpoolP160r1",
        t1.params().p.clone(),
        t1.params().n.clone(),
        EquationA::new(field, &BigUint::from_bytes_be(R1_A)),
        BigUint::from_bytes_be(R1_B),
        (BigUint::from_bytes_be(R1_GX), BigUint::from_bytes_be(R1_GY)),
    )
}

#[test]
fn names() {
    assert_eq!(brainpool::p160t1().params().name, "brainpoolP160t1");
    assert_eq!(brainpool::p160r1().params().name, "brainpoolP160r1");
}

#[test]
fn r1_params() {
    let t1 = brainpool::p160t1().params();
    let r1 = brainpool::p160r1().params();

    assert_eq!(r1.p, t1.p);
    assert_eq!(r1.n, t1.n);
    assert_eq!(r1.bit_size, 160);
    assert_eq!(r1.b, None);
    assert_eq!(r1.gx, BigUint::from_bytes_be(R1_GX));
    assert_eq!(r1.gy, BigUint::from_bytes_be(R1_GY));
    assert!(brainpool::p160r1().shares_base_point());
}

#[test]
fn scaling_factor_relates_coefficients() {
    let t1 = brainpool::p160t1();
    let field = t1.field();
    let z = brainpool::p160r1().scaling_factor();

    assert_eq!(z, &BigUint::from_bytes_be(Z));

    let z2 = field.square(z);
    let a = field.mul(&BigUint::from_bytes_be(R1_A), &field.square(&z2));
    let b = field.mul(&BigUint::from_bytes_be(R1_B), &field.cube(&z2));

    assert_eq!(a, EquationA::MinusThree.value(field));
    assert_eq!(&b, t1.equation_b());
}

#[test]
fn r1_is_not_t1() {
    let (gx, gy) = brainpool::p160r1().params().generator();

    assert!(brainpool::p160r1().is_on_curve(gx, gy));
    assert!(!brainpool::p160t1().is_on_curve(gx, gy));
}

#[test]
fn non_canonical_coordinates_are_not_on_curve() {
    let r1 = brainpool::p160r1();
    let (gx, gy) = r1.params().generator();
    let p = &r1.params().p;

    assert!(!r1.is_on_curve(&(gx + p), gy));
    assert!(!r1.is_on_curve(gx, &(gy + p)));
    assert_eq!(r1.is_on_curve(&(gx + p), gy), native_r1().is_on_curve(&(gx + p), gy));
}

#[test]
fn matches_native_r1() {
    let native = native_r1();
    let curve = brainpool::p160r1();
    let (gx, gy) = curve.params().generator();

    assert_eq!(curve.double(gx, gy), native.double(gx, gy));

    let k = hex!("0f1e2d3c4b5a69788796a5b4c3d2e1f001122334");
    let p = curve.scalar_base_mult(&k);
    assert_eq!(p, native.scalar_base_mult(&k));
    assert_eq!(curve.add(&p.0, &p.1, gx, gy), native.add(&p.0, &p.1, gx, gy));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn r1_scalar_base_mult_matches_native(k in prop::collection::vec(any::<u8>(), 20)) {
        let native = native_r1();
        prop_assert_eq!(
            brainpool::p160r1().scalar_base_mult(&k),
            native.scalar_base_mult(&k)
        );
    }
}
