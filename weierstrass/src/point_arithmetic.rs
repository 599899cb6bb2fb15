//! Point arithmetic in Jacobian coordinates.
//!
//! Doubling is specialised on the short Weierstrass equation's
//! 𝒂-coefficient. Formulas are taken from the [Explicit-Formulas Database].
//!
//! [Explicit-Formulas Database]: https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html

use crate::{BaseField, EquationA, projective::ProjectivePoint};
use num_traits::Zero;

/// Returns `lhs + rhs`.
///
/// Implements `add-2007-bl`, falling back to doubling when both operands are
/// the same point and returning the identity when they are inverses.
pub(crate) fn add(
    field: &BaseField,
    a: &EquationA,
    lhs: &ProjectivePoint,
    rhs: &ProjectivePoint,
) -> ProjectivePoint {
    if lhs.is_identity() {
        return rhs.clone();
    }

    if rhs.is_identity() {
        return lhs.clone();
    }

    let z1z1 = field.square(&lhs.z);
    let z2z2 = field.square(&rhs.z);
    let u1 = field.mul(&lhs.x, &z2z2);
    let u2 = field.mul(&rhs.x, &z1z1);
    let s1 = field.mul(&field.mul(&lhs.y, &rhs.z), &z2z2);
    let s2 = field.mul(&field.mul(&rhs.y, &lhs.z), &z1z1);
    let h = field.sub(&u2, &u1);
    let r = field.mul_small(&field.sub(&s2, &s1), 2);

    if h.is_zero() {
        return if r.is_zero() {
            double(field, a, lhs)
        } else {
            ProjectivePoint::identity()
        };
    }

    let i = field.square(&field.mul_small(&h, 2));
    let j = field.mul(&h, &i);
    let v = field.mul(&u1, &i);

    let x3 = field.sub(&field.sub(&field.square(&r), &j), &field.mul_small(&v, 2));
    let y3 = field.sub(
        &field.mul(&r, &field.sub(&v, &x3)),
        &field.mul_small(&field.mul(&s1, &j), 2),
    );
    let z3 = field.sub(
        &field.sub(&field.square(&field.add(&lhs.z, &rhs.z)), &z1z1),
        &z2z2,
    );
    let z3 = field.mul(&z3, &h);

    ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Returns `point + point`.
pub(crate) fn double(field: &BaseField, a: &EquationA, point: &ProjectivePoint) -> ProjectivePoint {
    if point.is_identity() {
        return ProjectivePoint::identity();
    }

    match a {
        EquationA::MinusThree => double_a_minus_three(field, point),
        _ => double_generic(field, a, point),
    }
}

/// Implements `dbl-2001-b`, valid only for `a = -3`.
fn double_a_minus_three(field: &BaseField, point: &ProjectivePoint) -> ProjectivePoint {
    let delta = field.square(&point.z);
    let gamma = field.square(&point.y);
    let beta = field.mul(&point.x, &gamma);
    let alpha = field.mul_small(
        &field.mul(&field.sub(&point.x, &delta), &field.add(&point.x, &delta)),
        3,
    );

    let x3 = field.sub(&field.square(&alpha), &field.mul_small(&beta, 8));
    let z3 = field.sub(
        &field.sub(&field.square(&field.add(&point.y, &point.z)), &gamma),
        &delta,
    );
    let y3 = field.sub(
        &field.mul(&alpha, &field.sub(&field.mul_small(&beta, 4), &x3)),
        &field.mul_small(&field.square(&gamma), 8),
    );

    ProjectivePoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Implements `dbl-2007-bl` for any `a`.
fn double_generic(field: &BaseField, a: &EquationA, point: &ProjectivePoint) -> ProjectivePoint {
    let xx = field.square(&point.x);
    let yy = field.square(&point.y);
    let yyyy = field.square(&yy);
    let zz = field.square(&point.z);

    let s = field.sub(
        &field.sub(&field.square(&field.add(&point.x, &yy)), &xx),
        &yyyy,
    );
    let s = field.mul_small(&s, 2);

    let m = field.mul_small(&xx, 3);
    let m = match a {
        EquationA::Zero => m,
        _ => field.add(&m, &field.mul(&a.value(field), &field.square(&zz))),
    };

    let t = field.sub(&field.square(&m), &field.mul_small(&s, 2));
    let y3 = field.sub(
        &field.mul(&m, &field.sub(&s, &t)),
        &field.mul_small(&yyyy, 8),
    );
    let z3 = field.sub(
        &field.sub(&field.square(&field.add(&point.y, &point.z)), &yy),
        &zz,
    );

    ProjectivePoint { x: t, y: y3, z: z3 }
}
