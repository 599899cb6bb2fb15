//! Development-related functionality.

/// Implement group law tests for a [`Curve`][`crate::Curve`] whose base point
/// has prime order `n`.
///
/// `$curve` is an expression evaluating to the curve (or a reference to it).
#[macro_export]
macro_rules! impl_curve_tests {
    ($curve:expr) => {
        #[test]
        fn generator_is_on_curve() {
            use $crate::Curve as _;

            let curve = $curve;
            let params = curve.params();
            assert!(curve.is_on_curve(&params.gx, &params.gy));
        }

        #[test]
        fn bit_size_matches_modulus() {
            use $crate::Curve as _;

            let params = $curve.params();
            assert_eq!(params.bit_size, params.p.bits());
        }

        #[test]
        fn identity_is_not_on_curve() {
            use $crate::Curve as _;

            let zero = $crate::BigUint::from(0u32);
            assert!(!$curve.is_on_curve(&zero, &zero));
        }

        #[test]
        fn order_times_generator_is_identity() {
            use $crate::Curve as _;

            let curve = $curve;
            let n = curve.params().n.to_bytes_be();
            let zero = $crate::BigUint::from(0u32);

            assert_eq!(curve.scalar_base_mult(&n), (zero.clone(), zero));
        }

        #[test]
        fn order_minus_one_times_generator_is_negation() {
            use $crate::Curve as _;

            let curve = $curve;
            let params = curve.params();
            let k = (&params.n - 1u32).to_bytes_be();

            let (x, y) = curve.scalar_base_mult(&k);
            assert_eq!(x, params.gx);
            assert_eq!(y, &params.p - &params.gy);
            assert!(curve.is_on_curve(&x, &y));
        }

        #[test]
        fn add_vs_double() {
            use $crate::Curve as _;

            let curve = $curve;
            let (gx, gy) = curve.params().generator();

            let doubled = curve.double(gx, gy);
            assert_eq!(curve.add(gx, gy, gx, gy), doubled);
            assert_eq!(curve.scalar_base_mult(&[2]), doubled);
            assert!(curve.is_on_curve(&doubled.0, &doubled.1));
        }

        #[test]
        fn repeated_add_matches_scalar_base_mult() {
            use $crate::Curve as _;

            let curve = $curve;
            let (gx, gy) = curve.params().generator();
            let (mut x, mut y) = (gx.clone(), gy.clone());

            for k in 2u8..=16 {
                (x, y) = curve.add(&x, &y, gx, gy);
                assert_eq!(curve.scalar_base_mult(&[k]), (x.clone(), y.clone()));
            }
        }

        #[test]
        fn scalar_mult_distributes_over_scalar_addition() {
            use $crate::Curve as _;

            let curve = $curve;
            let (gx, gy) = curve.double(&curve.params().gx, &curve.params().gy);

            let k1 = $crate::BigUint::from(0x1d2c_3b4a_5968_7786u64);
            let k2 = $crate::BigUint::from(0x0123_4567_89ab_cdefu64);
            let sum = &k1 + &k2;

            let (x1, y1) = curve.scalar_mult(&gx, &gy, &k1.to_bytes_be());
            let (x2, y2) = curve.scalar_mult(&gx, &gy, &k2.to_bytes_be());

            assert_eq!(
                curve.scalar_mult(&gx, &gy, &sum.to_bytes_be()),
                curve.add(&x1, &y1, &x2, &y2)
            );
        }

        #[test]
        fn scalar_base_mult_matches_scalar_mult() {
            use $crate::Curve as _;

            let curve = $curve;
            let (gx, gy) = curve.params().generator();
            let k = (&curve.params().n >> 1u32).to_bytes_be();

            assert_eq!(curve.scalar_base_mult(&k), curve.scalar_mult(gx, gy, &k));
        }
    };
}
