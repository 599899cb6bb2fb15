//! Curve domain parameters.

use crate::BigUint;
use alloc::string::String;

/// Domain parameters of an elliptic curve in short Weierstrass form.
///
/// The `a`-coefficient is not part of the descriptor: engines carry it as an
/// [`EquationA`][`crate::EquationA`], and adapters never evaluate their own
/// curve equation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Prime modulus of the base field.
    pub p: BigUint,

    /// Order of the base point.
    pub n: BigUint,

    /// Coefficient `b` in the curve equation, if the curve evaluates it.
    pub b: Option<BigUint>,

    /// x-coordinate of the base point.
    pub gx: BigUint,

    /// y-coordinate of the base point.
    pub gy: BigUint,

    /// Size of the base field in bits.
    pub bit_size: u64,

    /// Canonical name of the curve.
    pub name: String,
}

impl CurveParams {
    /// Base point coordinates `(gx, gy)`.
    pub fn generator(&self) -> (&BigUint, &BigUint) {
        (&self.gx, &self.gy)
    }
}
