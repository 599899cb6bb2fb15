//! brainpoolP384t1 and brainpoolP384r1 tests.

use hex_literal::hex;
use proptest::prelude::*;
use weierstrass::{BigUint, Curve, EquationA, PrimeCurve};

mod t1 {
    weierstrass::impl_curve_tests!(brainpool::p384t1());
}

mod r1 {
    weierstrass::impl_curve_tests!(brainpool::p384r1());
}

/// Published coefficients and base point of brainpoolP384r1.
const R1_A: &[u8] = &hex!(
    "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826"
);
const R1_B: &[u8] = &hex!(
    "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11"
);
const R1_GX: &[u8] = &hex!(
    "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e"
);
const R1_GY: &[u8] = &hex!(
    "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820341263c5315"
);

/// Isomorphism constant `Z` from RFC 5639 §3.6.
const Z: &[u8] = &hex!(
    "41dfe8dd399331f7166a66076734a89cd0d2bcdb7d068e44e1f378f41ecbae97d2d63dbc87bccddccc5da39e8589291c"
);

/// brainpoolP384r1 evaluated directly from its equation.
fn native_r1() -> PrimeCurve {
    let t1 = brainpool::p384t1();
    let field = t1.field();

    PrimeCurve::new(
        "brainpoolP384r1",
        t1.params().p.clone(),
        t1.params().n.clone(),
        EquationA::new(field, &BigUint::from_bytes_be(R1_A)),
        BigUint::from_bytes_be(R1_B),
        (BigUint::from_bytes_be(R1_GX), BigUint::from_bytes_be(R1_GY)),
    )
}

#[test]
fn names() {
    assert_eq!(brainpool::p384t1().params().name, "brainpoolP384t1");
    assert_eq!(brainpool::p384r1().params().name, "brainpoolP384r1");
}

#[test]
fn r1_params() {
    let t1 = brainpool::p384t1().params();
    let r1 = brainpool::p384r1().params();

    assert_eq!(r1.p, t1.p);
    assert_eq!(r1.n, t1.n);
    assert_eq!(r1.bit_size, 384);
    assert_eq!(r1.b, None);
    assert_eq!(r1.gx, BigUint::from_bytes_be(R1_GX));
    assert_eq!(r1.gy, BigUint::from_bytes_be(R1_GY));
    assert!(brainpool::p384r1().shares_base_point());
}

#[test]
fn scaling_factor_relates_coefficients() {
    let t1 = brainpool::p384t1();
    let field = t1.field();
    let z = brainpool::p384r1().scaling_factor();

    assert_eq!(z, &BigUint::from_bytes_be(Z));

    let z2 = field.square(z);
    let a = field.mul(&BigUint::from_bytes_be(R1_A), &field.square(&z2));
    let b = field.mul(&BigUint::from_bytes_be(R1_B), &field.cube(&z2));

    assert_eq!(a, EquationA::MinusThree.value(field));
    assert_eq!(&b, t1.equation_b());
}

#[test]
fn r1_is_not_t1() {
    let (gx, gy) = brainpool::p384r1().params().generator();

    assert!(brainpool::p384r1().is_on_curve(gx, gy));
    assert!(!brainpool::p384t1().is_on_curve(gx, gy));
}

#[test]
fn non_canonical_coordinates_are_not_on_curve() {
    let r1 = brainpool::p384r1();
    let (gx, gy) = r1.params().generator();
    let p = &r1.params().p;

    assert!(!r1.is_on_curve(&(gx + p), gy));
    assert!(!r1.is_on_curve(gx, &(gy + p)));
    assert_eq!(r1.is_on_curve(&(gx + p), gy), native_r1().is_on_curve(&(gx + p), gy));
}

#[test]
fn matches_native_r1() {
    let native = native_r1();
    let curve = brainpool::p384r1();
    let (gx, gy) = curve.params().generator();

    assert_eq!(curve.double(gx, gy), native.double(gx, gy));

    let k = hex!(
        "0f1e2d3c4b5a69788796a5b4c3d2e1f00112233445566778899aabbccddeeff00123456789abcdeffedcba9876543210"
    );
    let p = curve.scalar_base_mult(&k);
    assert_eq!(p, native.scalar_base_mult(&k));
    assert_eq!(curve.add(&p.0, &p.1, gx, gy), native.add(&p.0, &p.1, gx, gy));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn r1_scalar_base_mult_matches_native(k in prop::collection::vec(any::<u8>(), 48)) {
        let native = native_r1();
        prop_assert_eq!(
            brainpool::p384r1().scalar_base_mult(&k),
            native.scalar_base_mult(&k)
        );
    }
}
