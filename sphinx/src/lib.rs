#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
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

//! ## Protocol
//!
//! ```text
//! client                                          server (secret k)
//! H = hash_to_curve(SHA-512/256(password | domain))
//! r = random non-zero scalar
//! M = r·H                    ---------- M ---------->
//!                                                 check M is on curve
//!                            <--------- R ----------  R = k·M
//! check R is on curve
//! U = r⁻¹·R = k·H
//! key = HKDF-SHA-512/256(U.x ‖ U.y, info = "Virgil")
//! ```
//!
//! The server only ever sees `M`, which is uniformly distributed and
//! independent of the password. The derived key depends only on the password,
//! the domain and `k`.

#[cfg(feature = "std")]
extern crate std;

mod client;
mod curve;
mod error;
mod hash2curve;
mod scalar;
mod server;

pub use crate::{
    curve::{CurveContext, CurvePoint},
    error::{Error, Result},
    scalar::Mask,
};
pub use elliptic_curve;
pub use p256::{self, AffinePoint, FieldBytes, NonZeroScalar, Scalar, U256};
pub use rand_core;
