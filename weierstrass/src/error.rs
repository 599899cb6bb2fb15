//! Error types.

use core::fmt::{self, Display};

/// Errors raised while constructing a curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A value has no multiplicative inverse modulo the field prime, e.g. a
    /// zero scaling factor.
    NotInvertible,

    /// The two generators are not related by any `(x, y) ↦ (z²x, z³y)` map.
    GeneratorMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInvertible => f.write_str("value is not invertible modulo the field prime"),
            Error::GeneratorMismatch => {
                f.write_str("generators are not related by a scaling isomorphism")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
