//! Arithmetic on elliptic curves in short Weierstrass form `y² = x³ + ax + b`
//! over arbitrary prime fields.
//!
//! The [`Curve`] trait describes a curve implementation in terms of affine
//! coordinates. Two implementations are provided:
//!
//! - [`PrimeCurve`]: point arithmetic in Jacobian coordinates, with a doubling
//!   formula specialised for `a = -3`.
//! - [`IsomorphicCurve`]: runs a curve with an arbitrary `a`-coefficient on top
//!   of another [`Curve`] with `a = -3`, mapping points through the isomorphism
//!   `(x, y) ↦ (z²x, z³y)`.
//!
//! The point at infinity is represented by the affine coordinates `(0, 0)`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "dev")]
pub mod dev;

mod curve;
mod equation_a;
mod error;
mod field;
mod isomorphism;
mod params;
mod point_arithmetic;
mod projective;

pub use crate::{
    curve::PrimeCurve,
    equation_a::EquationA,
    error::{Error, Result},
    field::BaseField,
    isomorphism::IsomorphicCurve,
    params::CurveParams,
};
pub use num_bigint::{self, BigUint};

use alloc::sync::Arc;

/// Affine coordinates `(x, y)` of a curve point.
pub type Coordinates = (BigUint, BigUint);

/// Elliptic curve in short Weierstrass form.
///
/// Coordinates passed to these methods are expected to be reduced field
/// elements in `[0, p)`. This is not checked outside of debug builds:
/// out-of-range inputs produce meaningless (but deterministic) results,
/// except in [`Curve::is_on_curve`] which reports them as not on the curve.
///
/// Scalars are big-endian byte strings and are not reduced modulo the group
/// order.
pub trait Curve {
    /// Domain parameters of this curve.
    fn params(&self) -> &CurveParams;

    /// Is `(x, y)` a point on this curve?
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Returns `(x1, y1) + (x2, y2)`.
    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> Coordinates;

    /// Returns `2 * (x1, y1)`.
    fn double(&self, x1: &BigUint, y1: &BigUint) -> Coordinates;

    /// Returns `k * (x1, y1)`.
    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> Coordinates;

    /// Returns `k * G` where `G` is the base point of this curve.
    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates;
}

impl<C: Curve + ?Sized> Curve for &C {
    fn params(&self) -> &CurveParams {
        (**self).params()
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        (**self).is_on_curve(x, y)
    }

    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> Coordinates {
        (**self).add(x1, y1, x2, y2)
    }

    fn double(&self, x1: &BigUint, y1: &BigUint) -> Coordinates {
        (**self).double(x1, y1)
    }

    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> Coordinates {
        (**self).scalar_mult(x1, y1, k)
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates {
        (**self).scalar_base_mult(k)
    }
}

impl<C: Curve + ?Sized> Curve for Arc<C> {
    fn params(&self) -> &CurveParams {
        (**self).params()
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        (**self).is_on_curve(x, y)
    }

    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> Coordinates {
        (**self).add(x1, y1, x2, y2)
    }

    fn double(&self, x1: &BigUint, y1: &BigUint) -> Coordinates {
        (**self).double(x1, y1)
    }

    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> Coordinates {
        (**self).scalar_mult(x1, y1, k)
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates {
        (**self).scalar_base_mult(k)
    }
}
