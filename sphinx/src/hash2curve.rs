//! Try-and-increment mapping of arbitrary bytes onto the curve.
//!
//! The input seeds a 32-byte big-endian counter. Each attempt hashes the
//! counter with SHA-512/256 and takes the digest as a candidate
//! x-coordinate. If `x³ - 3x + b` is a quadratic residue its principal square
//! root `(x³ - 3x + b)^((p + 1) / 4)` is the y-coordinate, otherwise the
//! counter is incremented and the next candidate is tried.
//!
//! About half of all field elements are quadratic residues so two attempts are
//! expected on average. The running time depends on the input.

use crate::{CurveContext, CurvePoint, Error, Result};
use elliptic_curve::sec1::FromEncodedPoint;
use p256::{AffinePoint, EncodedPoint, FieldElement};
use sha2::{Digest, Sha512_256};
use zeroize::Zeroize;

/// Number of candidates tried before giving up. The probability of reaching
/// it is about 2⁻²⁵⁶.
const MAX_ATTEMPTS: usize = 256;

impl CurveContext {
    /// Deterministically maps `input` to a point on the curve.
    ///
    /// Only the first 32 bytes of `input` are used; shorter inputs are
    /// zero-padded on the right.
    pub fn hash_to_curve(&self, input: &[u8]) -> Result<CurvePoint> {
        let point = self.hash_to_affine(input)?;
        CurvePoint::from_affine(&point)
    }

    pub(crate) fn hash_to_affine(&self, input: &[u8]) -> Result<AffinePoint> {
        let mut counter = [0u8; 32];
        let len = input.len().min(counter.len());
        counter[..len].copy_from_slice(&input[..len]);

        let mut attempts = 0;
        while attempts < MAX_ATTEMPTS {
            attempts += 1;

            if let Some(point) = self.try_point(&counter) {
                counter.zeroize();

                #[cfg(feature = "tracing")]
                tracing::trace!(attempts, "mapped input onto curve");

                return Ok(point);
            }

            increment(&mut counter);
        }

        counter.zeroize();
        Err(Error::HashToCurve)
    }

    fn try_point(&self, counter: &[u8; 32]) -> Option<AffinePoint> {
        let x_bytes = Sha512_256::digest(counter);
        let x = Option::<FieldElement>::from(FieldElement::from_bytes(&x_bytes))?;
        let y = Option::<FieldElement>::from(self.curve_equation_rhs(x).sqrt())?;
        let y_bytes = y.to_bytes();

        // A faulty square root must never yield a point off the curve.
        if !bool::from(self.is_on_curve(&x_bytes, &y_bytes)) {
            return None;
        }

        let encoded = EncodedPoint::from_affine_coordinates(&x_bytes, &y_bytes, false);
        AffinePoint::from_encoded_point(&encoded).into()
    }
}

/// Increments a big-endian counter in place, wrapping on overflow.
fn increment(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}
