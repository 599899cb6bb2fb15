//! Brainpool elliptic curves as defined in [RFC 5639], for all seven field
//! sizes from 160 to 512 bits.
//!
//! Each "twisted" curve (`t1`) has `a = -3` and is evaluated directly. The
//! corresponding random curve (`r1`) shares its field and group order and is
//! evaluated on top of its twist through the isomorphism
//! `(x, y) ↦ (z²x, z³y)`.
//!
//! All curves are process-wide statics, built on first use.
//!
//! ```
//! use brainpool::weierstrass::Curve;
//!
//! let curve = brainpool::p256r1();
//! let (gx, gy) = curve.params().generator();
//! assert!(curve.is_on_curve(gx, gy));
//! ```
//!
//! [RFC 5639]: https://datatracker.ietf.org/doc/html/rfc5639

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
compile_error!("`brainpool` requires either the `critical-section` or the `std` feature");

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod p160;
mod p192;
mod p224;
mod p256;
mod p320;
mod p384;
mod p512;

pub use crate::{
    p160::{p160r1, p160t1},
    p192::{p192r1, p192t1},
    p224::{p224r1, p224t1},
    p256::{p256r1, p256t1},
    p320::{p320r1, p320t1},
    p384::{p384r1, p384t1},
    p512::{p512r1, p512t1},
};
pub use weierstrass;

#[cfg(feature = "pkcs8")]
pub use pkcs8;

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

#[cfg(feature = "pkcs8")]
use {pkcs8::ObjectIdentifier, weierstrass::Curve};

/// Object identifier of brainpoolP160t1.
#[cfg(feature = "pkcs8")]
pub const BP160T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.2");
/// Object identifier of brainpoolP192t1.
#[cfg(feature = "pkcs8")]
pub const BP192T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.4");
/// Object identifier of brainpoolP224t1.
#[cfg(feature = "pkcs8")]
pub const BP224T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.6");
/// Object identifier of brainpoolP256t1.
#[cfg(feature = "pkcs8")]
pub const BP256T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.8");
/// Object identifier of brainpoolP320t1.
#[cfg(feature = "pkcs8")]
pub const BP320T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.10");
/// Object identifier of brainpoolP384t1.
#[cfg(feature = "pkcs8")]
pub const BP384T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.12");
/// Object identifier of brainpoolP512t1.
#[cfg(feature = "pkcs8")]
pub const BP512T1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.14");

/// Object identifier of brainpoolP160r1.
#[cfg(feature = "pkcs8")]
pub const BP160R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.1");
/// Object identifier of brainpoolP192r1.
#[cfg(feature = "pkcs8")]
pub const BP192R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.3");
/// Object identifier of brainpoolP224r1.
#[cfg(feature = "pkcs8")]
pub const BP224R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.5");
/// Object identifier of brainpoolP256r1.
#[cfg(feature = "pkcs8")]
pub const BP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7");
/// Object identifier of brainpoolP320r1.
#[cfg(feature = "pkcs8")]
pub const BP320R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.9");
/// Object identifier of brainpoolP384r1.
#[cfg(feature = "pkcs8")]
pub const BP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.11");
/// Object identifier of brainpoolP512r1.
#[cfg(feature = "pkcs8")]
pub const BP512R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.13");

/// Registered curves by object identifier.
#[cfg(feature = "pkcs8")]
const CURVES: [(ObjectIdentifier, fn() -> &'static (dyn Curve + Sync)); 14] = [
    (BP160R1, || p160r1()),
    (BP160T1, || p160t1()),
    (BP192R1, || p192r1()),
    (BP192T1, || p192t1()),
    (BP224R1, || p224r1()),
    (BP224T1, || p224t1()),
    (BP256R1, || p256r1()),
    (BP256T1, || p256t1()),
    (BP320R1, || p320r1()),
    (BP320T1, || p320t1()),
    (BP384R1, || p384r1()),
    (BP384T1, || p384t1()),
    (BP512R1, || p512r1()),
    (BP512T1, || p512t1()),
];

/// Look up a curve by its object identifier.
///
/// Returns `None` for object identifiers of non-Brainpool curves.
#[cfg(feature = "pkcs8")]
pub fn curve_from_oid(oid: &ObjectIdentifier) -> Option<&'static (dyn Curve + Sync)> {
    CURVES
        .iter()
        .find(|(id, _)| id == oid)
        .map(|(_, curve)| curve())
}
