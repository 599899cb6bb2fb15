//! Macros for defining Brainpool curves.

/// Defines the lazily built twisted (`t1`) engine and random (`r1`) adapter
/// of a Brainpool curve, along with their accessors.
///
/// Accepts the following parameters:
///
/// - bit size of the field modulus
/// - names of the `t1` and `r1` accessor functions
/// - hex serializations of the field modulus `p` and the group order `n`
/// - `b`-coefficient and base point of the `t1` curve (which has `a = -3`)
/// - base point of the `r1` curve
/// - isomorphism constant `Z` relating the two curves (only checked in tests)
macro_rules! brainpool_curve {
    (
        bits: $bits:literal,
        t1: $t1:ident,
        r1: $r1:ident,
        p: $p:literal,
        n: $n:literal,
        t1_b: $t1_b:literal,
        t1_generator: ($t1_gx:literal, $t1_gy:literal $(,)?),
        r1_generator: ($r1_gx:literal, $r1_gy:literal $(,)?),
        z: $z:literal $(,)?
    ) => {
        use crate::LazyLock;
        use hex_literal::hex;
        use weierstrass::{BigUint, IsomorphicCurve, PrimeCurve};

        static T1: LazyLock<PrimeCurve> = LazyLock::new(|| {
            PrimeCurve::with_a_minus_three(
                concat!("brainpoolP", $bits, "t1"),
                BigUint::from_bytes_be(&hex!($p)),
                BigUint::from_bytes_be(&hex!($n)),
                BigUint::from_bytes_be(&hex!($t1_b)),
                (
                    BigUint::from_bytes_be(&hex!($t1_gx)),
                    BigUint::from_bytes_be(&hex!($t1_gy)),
                ),
            )
        });

        static R1: LazyLock<IsomorphicCurve<&'static PrimeCurve>> = LazyLock::new(|| {
            IsomorphicCurve::from_generators(
                $t1(),
                BigUint::from_bytes_be(&hex!($r1_gx)),
                BigUint::from_bytes_be(&hex!($r1_gy)),
            )
            .expect(concat!(
                "brainpoolP", $bits, "r1 base point maps onto brainpoolP", $bits, "t1 base point"
            ))
        });

        #[doc = concat!("brainpoolP", $bits, "t1: `y² = x³ - 3x + b` over the ", $bits, "-bit Brainpool prime.")]
        pub fn $t1() -> &'static PrimeCurve {
            &T1
        }

        #[doc = concat!("brainpoolP", $bits, "r1, evaluated on [`", stringify!($t1), "`].")]
        pub fn $r1() -> &'static IsomorphicCurve<&'static PrimeCurve> {
            &R1
        }

    };
}
