//! Curves evaluated through an isomorphism onto a curve with `a = -3`.
//!
//! Two short Weierstrass curves `E: y² = x³ + ax + b` and
//! `E': y² = x³ + a'x + b'` over the same field are isomorphic via
//!
//! ```text
//! φ(x, y) = (z²x, z³y)
//! ```
//!
//! whenever `a' = z⁴a` and `b' = z⁶b`. When `a' = -3`, `E` can reuse the
//! (typically faster) arithmetic of `E'`: map the inputs with `φ`, operate on
//! `E'` and map the results back with `φ⁻¹(x', y') = (z⁻²x', z⁻³y')`.

use crate::{BaseField, BigUint, Coordinates, Curve, CurveParams, Error, Result};
use alloc::format;

/// Curve whose group operations are delegated to an isomorphic `twisted`
/// curve.
///
/// The adapter never evaluates its own curve equation, so its
/// [`CurveParams::b`] is `None`.
#[derive(Clone, Debug)]
pub struct IsomorphicCurve<C> {
    twisted: C,
    params: CurveParams,
    field: BaseField,
    z: BigUint,
    z2: BigUint,
    z3: BigUint,
    zinv2: BigUint,
    zinv3: BigUint,
    /// `φ(G)`: the base point in the twisted curve's coordinates.
    twisted_base_point: Coordinates,
    /// Is `φ(G)` the twisted curve's own base point?
    shares_base_point: bool,
}

impl<C: Curve> IsomorphicCurve<C> {
    /// Wrap `twisted` with the scaling factor `z`, using `(gx, gy)` as the
    /// base point.
    ///
    /// The name of the new curve is derived from the twisted curve's name by
    /// replacing a `t1` suffix with `r1`.
    ///
    /// Returns [`Error::NotInvertible`] if `z` has no inverse modulo `p`.
    pub fn new(twisted: C, gx: BigUint, gy: BigUint, z: BigUint) -> Result<Self> {
        let mut params = twisted.params().clone();
        let field = BaseField::new(params.p.clone());

        let z = field.reduce(&z);
        let zinv = field.invert(&z).ok_or(Error::NotInvertible)?;

        params.b = None;
        params.gx = gx;
        params.gy = gy;
        if let Some(prefix) = params.name.strip_suffix("t1") {
            params.name = format!("{prefix}r1");
        }

        let z2 = field.square(&z);
        let z3 = field.mul(&z2, &z);
        let zinv2 = field.square(&zinv);
        let zinv3 = field.mul(&zinv2, &zinv);

        let twisted_base_point = (
            field.mul(&params.gx, &z2),
            field.mul(&params.gy, &z3),
        );
        let shares_base_point = {
            let (tx, ty) = twisted.params().generator();
            (tx, ty) == (&twisted_base_point.0, &twisted_base_point.1)
        };

        Ok(Self {
            twisted,
            params,
            field,
            z,
            z2,
            z3,
            zinv2,
            zinv3,
            twisted_base_point,
            shares_base_point,
        })
    }

    /// Wrap `twisted`, deriving the scaling factor from the requirement that
    /// `φ(gx, gy)` is the twisted curve's base point.
    ///
    /// Returns [`Error::NotInvertible`] if a base point coordinate is zero, or
    /// [`Error::GeneratorMismatch`] if no scaling factor maps one base point
    /// onto the other.
    pub fn from_generators(twisted: C, gx: BigUint, gy: BigUint) -> Result<Self> {
        let field = BaseField::new(twisted.params().p.clone());
        let (tx, ty) = twisted.params().generator();

        // z = z³ / z² = (ty / gy) / (tx / gx)
        let denominator = field.mul(&field.reduce(&gy), tx);
        let denominator = field.invert(&denominator).ok_or(Error::NotInvertible)?;
        let z = field.mul(&field.mul(ty, &field.reduce(&gx)), &denominator);

        let curve = Self::new(twisted, gx, gy, z)?;

        if curve.shares_base_point {
            Ok(curve)
        } else {
            Err(Error::GeneratorMismatch)
        }
    }

    /// The twisted curve all arithmetic is delegated to.
    pub fn twisted(&self) -> &C {
        &self.twisted
    }

    /// The scaling factor `z`.
    pub fn scaling_factor(&self) -> &BigUint {
        &self.z
    }

    /// Maps a point of this curve to the twisted curve: `(z²x, z³y)`.
    pub fn to_twisted(&self, x: &BigUint, y: &BigUint) -> Coordinates {
        debug_assert!(
            self.field.contains(x) && self.field.contains(y),
            "coordinates are not reduced modulo p"
        );

        (self.field.mul(x, &self.z2), self.field.mul(y, &self.z3))
    }

    /// Maps a point of the twisted curve to this curve: `(z⁻²x, z⁻³y)`.
    pub fn from_twisted(&self, (tx, ty): Coordinates) -> Coordinates {
        (self.field.mul(&tx, &self.zinv2), self.field.mul(&ty, &self.zinv3))
    }
}

impl<C: Curve> Curve for IsomorphicCurve<C> {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if !self.field.contains(x) || !self.field.contains(y) {
            return false;
        }

        let (tx, ty) = self.to_twisted(x, y);
        self.twisted.is_on_curve(&tx, &ty)
    }

    fn add(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, y2: &BigUint) -> Coordinates {
        let (tx1, ty1) = self.to_twisted(x1, y1);
        let (tx2, ty2) = self.to_twisted(x2, y2);
        self.from_twisted(self.twisted.add(&tx1, &ty1, &tx2, &ty2))
    }

    fn double(&self, x1: &BigUint, y1: &BigUint) -> Coordinates {
        let (tx1, ty1) = self.to_twisted(x1, y1);
        self.from_twisted(self.twisted.double(&tx1, &ty1))
    }

    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> Coordinates {
        let (tx1, ty1) = self.to_twisted(x1, y1);
        self.from_twisted(self.twisted.scalar_mult(&tx1, &ty1, k))
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates {
        if self.shares_base_point {
            return self.from_twisted(self.twisted.scalar_base_mult(k));
        }

        let (tx, ty) = &self.twisted_base_point;
        self.from_twisted(self.twisted.scalar_mult(tx, ty, k))
    }
}

impl<C> IsomorphicCurve<C> {
    /// Is the twisted curve's base point the image of this curve's base
    /// point? If not, [`Curve::scalar_base_mult`] multiplies the mapped base
    /// point instead of calling the twisted curve's fixed-base routine.
    pub fn shares_base_point(&self) -> bool {
        self.shares_base_point
    }
}
