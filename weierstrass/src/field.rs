//! Arithmetic modulo the base field prime.

use crate::BigUint;
use core::mem;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Prime field `𝔽ₚ` with elements represented as [`BigUint`]s in `[0, p)`.
///
/// Operands are expected to be reduced; results always are.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseField {
    p: BigUint,
}

impl BaseField {
    /// Field of integers modulo `p`.
    pub fn new(p: BigUint) -> Self {
        debug_assert!(p > BigUint::one(), "modulus must be greater than one");
        Self { p }
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Returns `a mod p` for an arbitrary integer `a`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    /// Is `a` a reduced field element?
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.p
    }

    /// Returns `a + b`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= self.p { sum - &self.p } else { sum }
    }

    /// Returns `a - b`.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            &self.p - (b - a)
        }
    }

    /// Returns `-a`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &self.p - a
        }
    }

    /// Returns `a * b`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Returns `a²`.
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `a³`.
    pub fn cube(&self, a: &BigUint) -> BigUint {
        self.mul(&self.square(a), a)
    }

    /// Returns `k * a` for a small constant `k`.
    pub fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.p
    }

    /// Returns `a⁻¹`, or `None` if `gcd(a, p) ≠ 1`.
    ///
    /// Uses the extended Euclidean algorithm, so unlike Fermat inversion this
    /// also detects non-invertible elements when `p` is not prime.
    pub fn invert(&self, a: &BigUint) -> Option<BigUint> {
        let p = BigInt::from(self.p.clone());
        let mut r0 = p.clone();
        let mut r1 = BigInt::from(self.reduce(a));
        let mut t0 = BigInt::zero();
        let mut t1 = BigInt::one();

        while !r1.is_zero() {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            r0 = mem::replace(&mut r1, r2);
            let t2 = &t0 - &q * &t1;
            t0 = mem::replace(&mut t1, t2);
        }

        if !r0.is_one() {
            return None;
        }

        (((t0 % &p) + &p) % &p).to_biguint()
    }
}
