//! NIST P-192 (a.k.a. secp192r1) elliptic curve.
//!
//! Curve parameters can be found in [FIPS 186-4] § D.1.2.1: Curve P-192.
//!
//! ```
//! use p192::weierstrass::Curve;
//!
//! let curve = p192::nist_p192();
//! assert_eq!(curve.params().name, "secp192r1");
//! ```
//!
//! [FIPS 186-4]: https://csrc.nist.gov/publications/detail/fips/186/4/final

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

#[cfg(not(any(feature = "critical-section", feature = "std")))]
compile_error!("`p192` requires either the `critical-section` or the `std` feature");

#[cfg(feature = "std")]
extern crate std;

pub use weierstrass;

#[cfg(feature = "pkcs8")]
pub use pkcs8;

use hex_literal::hex;
use weierstrass::{BigUint, PrimeCurve};

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// Object identifier of secp192r1.
#[cfg(feature = "pkcs8")]
pub const OID: pkcs8::ObjectIdentifier = pkcs8::ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1");

/// p = 0xffffffff ffffffff ffffffff fffffffe ffffffff ffffffff
const P: [u8; 24] = hex!("fffffffffffffffffffffffffffffffeffffffffffffffff");

/// Order of NIST P-192's elliptic curve group (i.e. scalar modulus).
const N: [u8; 24] = hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831");

/// b = 0x64210519 e59c80e7 0fa7e9ab 72243049 feb8deec c146b9b1
const B: [u8; 24] = hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1");

/// Base point of P-192.
///
/// ```text
/// Gₓ = 0x188da80e b03090f6 7cbf20eb 43a18800 f4ff0afd 82ff1012
/// Gᵧ = 0x07192b95 ffc8da78 631011ed 6b24cdd5 73f977a1 1e794811
/// ```
const GENERATOR: ([u8; 24], [u8; 24]) = (
    hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
    hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
);

static P192: LazyLock<PrimeCurve> = LazyLock::new(|| {
    PrimeCurve::with_a_minus_three(
        "secp192r1",
        BigUint::from_bytes_be(&P),
        BigUint::from_bytes_be(&N),
        BigUint::from_bytes_be(&B),
        (
            BigUint::from_bytes_be(&GENERATOR.0),
            BigUint::from_bytes_be(&GENERATOR.1),
        ),
    )
});

/// NIST P-192: `y² = x³ - 3x + b`.
pub fn nist_p192() -> &'static PrimeCurve {
    &P192
}
