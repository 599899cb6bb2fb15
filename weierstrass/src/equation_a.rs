//! Support for formulas specialised to the short Weierstrass equation's
//! 𝒂-coefficient.

use crate::{BaseField, BigUint};
use num_traits::Zero;

/// The 𝒂-coefficient of the short Weierstrass equation `y² = x³ + ax + b`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EquationA {
    /// `a = 0`.
    Zero,

    /// `a = -3`, which admits a cheaper doubling formula.
    MinusThree,

    /// Any other coefficient, as a reduced field element.
    Generic(BigUint),
}

impl EquationA {
    /// Classify `a`, picking a specialised variant where one applies.
    pub fn new(field: &BaseField, a: &BigUint) -> Self {
        let a = field.reduce(a);

        if a.is_zero() {
            EquationA::Zero
        } else if field.add(&a, &BigUint::from(3u32)).is_zero() {
            EquationA::MinusThree
        } else {
            EquationA::Generic(a)
        }
    }

    /// The coefficient as a field element.
    pub fn value(&self, field: &BaseField) -> BigUint {
        match self {
            EquationA::Zero => BigUint::zero(),
            EquationA::MinusThree => field.neg(&BigUint::from(3u32)),
            EquationA::Generic(a) => a.clone(),
        }
    }
}
