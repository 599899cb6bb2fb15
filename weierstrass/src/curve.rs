//! Short Weierstrass curves with point arithmetic in Jacobian coordinates.

use crate::{
    BaseField, BigUint, Coordinates, Curve, CurveParams, EquationA, projective::ProjectivePoint,
};
use alloc::string::String;

/// Elliptic curve `y² = x³ + ax + b` over `𝔽ₚ`.
#[derive(Clone, Debug)]
pub struct PrimeCurve {
    params: CurveParams,
    field: BaseField,
    a: EquationA,
    b: BigUint,
}

impl PrimeCurve {
    /// Curve with the given name, field modulus `p`, group order `n`,
    /// equation coefficients and base point.
    ///
    /// The base point is expected to lie on the curve; this is only checked in
    /// debug builds.
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        n: BigUint,
        a: EquationA,
        b: BigUint,
        generator: (BigUint, BigUint),
    ) -> Self {
        let field = BaseField::new(p.clone());
        let b = field.reduce(&b);
        let (gx, gy) = generator;

        let curve = Self {
            params: CurveParams {
                bit_size: p.bits(),
                p,
                n,
                b: Some(b.clone()),
                gx,
                gy,
                name: name.into(),
            },
            field,
            a,
            b,
        };

        debug_assert!(
            curve.is_on_curve(&curve.params.gx, &curve.params.gy),
            "base point of {} is not on the curve",
            curve.params.name
        );

        curve
    }

    /// Curve `y² = x³ - 3x + b`.
    pub fn with_a_minus_three(
        name: impl Into<String>,
        p: BigUint,
        n: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
    ) -> Self {
        Self::new(name, p, n, EquationA::MinusThree, b, generator)
    }

    /// The 𝒂-coefficient of the curve equation.
    pub fn equation_a(&self) -> &EquationA {
        &self.a
    }

    /// The 𝒃-coefficient of the curve equation.
    pub fn equation_b(&self) -> &BigUint {
        &self.b
    }

    /// Base field of the curve.
    pub fn field(&self) -> &BaseField {
        &self.field
    }

    fn debug_assert_reduced(&self, x: &BigUint, y: &BigUint) {
        debug_assert!(
            self.field.contains(x) && self.field.contains(y),
            "coordinates are not reduced modulo p"
        );
    }
}

impl Curve for PrimeCurve {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if !self.field.contains(x) || !self.field.contains(y) {
            return false;
        }

        // y² = x³ + ax + b
        let f = &self.field;
        let rhs = f.add(&f.cube(x), &f.mul(&self.a.value(f), x));
        let rhs = f.add(&rhs, &self.b);

        f.square(y) == rhs
    }

    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> Coordinates {
        self.debug_assert_reduced(x1, y1);
        self.debug_assert_reduced(x2, y2);

        let p1 = ProjectivePoint::from_affine(x1, y1);
        let p2 = ProjectivePoint::from_affine(x2, y2);
        p1.add(&p2, &self.field, &self.a).to_affine(&self.field)
    }

    fn double(&self, x1: &BigUint, y1: &BigUint) -> Coordinates {
        self.debug_assert_reduced(x1, y1);

        ProjectivePoint::from_affine(x1, y1)
            .double(&self.field, &self.a)
            .to_affine(&self.field)
    }

    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> Coordinates {
        self.debug_assert_reduced(x1, y1);

        ProjectivePoint::from_affine(x1, y1)
            .mul(k, &self.field, &self.a)
            .to_affine(&self.field)
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates {
        self.scalar_mult(&self.params.gx, &self.params.gy, k)
    }
}
