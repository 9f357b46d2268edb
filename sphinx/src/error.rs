//! Error type

use core::fmt::{self, Display};

/// Errors produced while running the protocol.
///
/// None of these are recoverable within a single protocol run: the caller
/// decides whether to restart from [`CurveContext::mask_password`].
///
/// [`CurveContext::mask_password`]: crate::CurveContext::mask_password
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Coordinates are out of range or do not satisfy the curve equation.
    InvalidPoint,
    /// Scalar multiplication produced the point at infinity.
    IdentityPoint,
    /// The random number generator failed to produce a scalar.
    Randomness,
    /// The key derivation function cannot produce the requested output length.
    Kdf,
    /// No curve point was found within the attempt budget.
    HashToCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidPoint => "invalid point",
            Self::IdentityPoint => "point at infinity",
            Self::Randomness => "randomness source failure",
            Self::Kdf => "invalid key derivation output length",
            Self::HashToCurve => "hash to curve exhausted its attempts",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type with the `sphinx` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
