//! Projective curve points.

use crate::{BaseField, BigUint, Coordinates, EquationA, point_arithmetic};
use alloc::vec::Vec;
use num_traits::{One, Zero};

/// Point in Jacobian coordinates `(X : Y : Z)`, i.e. the affine point
/// `(X / Z², Y / Z³)`. The point at infinity has `Z = 0`.
#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub(crate) fn identity() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Lift affine coordinates, mapping `(0, 0)` to the identity.
    pub(crate) fn from_affine(x: &BigUint, y: &BigUint) -> Self {
        if x.is_zero() && y.is_zero() {
            return Self::identity();
        }

        Self {
            x: x.clone(),
            y: y.clone(),
            z: BigUint::one(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point, or `(0, 0)` for the
    /// identity.
    pub(crate) fn to_affine(&self, field: &BaseField) -> Coordinates {
        match field.invert(&self.z) {
            Some(zinv) => {
                let zinv2 = field.square(&zinv);
                let zinv3 = field.mul(&zinv2, &zinv);
                (field.mul(&self.x, &zinv2), field.mul(&self.y, &zinv3))
            }
            None => (BigUint::zero(), BigUint::zero()),
        }
    }

    /// Returns `self + other`.
    pub(crate) fn add(&self, other: &Self, field: &BaseField, a: &EquationA) -> Self {
        point_arithmetic::add(field, a, self, other)
    }

    /// Returns `self + self`.
    pub(crate) fn double(&self, field: &BaseField, a: &EquationA) -> Self {
        point_arithmetic::double(field, a, self)
    }

    /// Returns `[k] self` for a big-endian scalar `k`, using a 4-bit fixed
    /// window.
    pub(crate) fn mul(&self, k: &[u8], field: &BaseField, a: &EquationA) -> Self {
        let mut pc = Vec::with_capacity(16);
        pc.push(Self::identity());
        pc.push(self.clone());

        for i in 2..16 {
            let next = if i % 2 == 0 {
                pc[i / 2].double(field, a)
            } else {
                pc[i - 1].add(self, field, a)
            };
            pc.push(next);
        }

        let mut q = Self::identity();

        for byte in k {
            for slot in [byte >> 4, byte & 0xf] {
                for _ in 0..4 {
                    q = q.double(field, a);
                }

                q = q.add(&pc[slot as usize], field, a);
            }
        }

        q
    }
}
