//! NIST P-256 domain parameters and point validation.

use crate::{Error, Result};
use elliptic_curve::{
    Curve,
    sec1::{Coordinates, FromEncodedPoint, ToEncodedPoint},
};
use p256::{
    AffinePoint, EncodedPoint, FieldBytes, FieldElement, NistP256, ProjectivePoint, Scalar, U256,
};
use primeorder::PrimeCurveParams;
use subtle::{Choice, ConstantTimeEq};

/// `n - 2` as little-endian 64-bit limbs, where `n` is the order of the
/// P-256 base point.
///
/// ```text
/// n - 2 = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC63254F
/// ```
const ORDER_MINUS_TWO: [u64; 4] = [
    0xf3b9_cac2_fc63_254f,
    0xbce6_faad_a717_9e84,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_0000_0000,
];

/// Elliptic curve domain parameters used by every protocol operation.
///
/// The curve is `y² = x³ + a·x + b` over the P-256 base field with `a = -3`.
/// The context is immutable: construct it once (usually as
/// [`CurveContext::P256`]) and share it by reference between threads.
#[derive(Clone, Copy, Debug)]
pub struct CurveContext {
    pub(crate) a: FieldElement,
    pub(crate) b: FieldElement,
    pub(crate) order: U256,
    pub(crate) order_minus_two: [u64; 4],
}

impl CurveContext {
    /// NIST P-256 (a.k.a. secp256r1, prime256v1).
    pub const P256: Self = Self {
        a: <NistP256 as PrimeCurveParams>::EQUATION_A,
        b: <NistP256 as PrimeCurveParams>::EQUATION_B,
        order: <NistP256 as Curve>::ORDER,
        order_minus_two: ORDER_MINUS_TWO,
    };

    /// Order of the base point, i.e. the scalar modulus `n`.
    pub const fn order(&self) -> U256 {
        self.order
    }

    /// Checks that `(x, y)` are canonical field elements satisfying the curve
    /// equation.
    pub fn is_on_curve(&self, x: &FieldBytes, y: &FieldBytes) -> Choice {
        let x = FieldElement::from_bytes(x);
        let y = FieldElement::from_bytes(y);
        let in_range = x.is_some() & y.is_some();

        let x = x.unwrap_or(FieldElement::ZERO);
        let y = y.unwrap_or(FieldElement::ZERO);
        in_range & y.square().ct_eq(&self.curve_equation_rhs(x))
    }

    /// `x³ + a·x + b`
    pub(crate) fn curve_equation_rhs(&self, x: FieldElement) -> FieldElement {
        x.square() * x + self.a * x + self.b
    }

    /// Validates untrusted coordinates, returning the affine point on success.
    pub(crate) fn validate(&self, point: &CurvePoint) -> Result<AffinePoint> {
        if !bool::from(self.is_on_curve(&point.x, &point.y)) {
            return Err(Error::InvalidPoint);
        }

        let encoded = EncodedPoint::from_affine_coordinates(&point.x, &point.y, false);
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or(Error::InvalidPoint)
    }

    /// Computes `scalar · point`.
    pub(crate) fn multiply(&self, point: &AffinePoint, scalar: &Scalar) -> Result<CurvePoint> {
        let product = (ProjectivePoint::from(*point) * scalar).to_affine();
        CurvePoint::from_affine(&product)
    }
}

impl Default for CurveContext {
    fn default() -> Self {
        Self::P256
    }
}

/// A curve point in affine coordinates, each a big-endian serialized field
/// element.
///
/// Values of this type can carry arbitrary, untrusted coordinates. They are
/// checked against the curve equation whenever they enter an operation.
/// The point at infinity has no representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurvePoint {
    x: FieldBytes,
    y: FieldBytes,
}

impl CurvePoint {
    /// Creates a point from affine coordinates without validating them.
    pub fn from_coordinates(x: FieldBytes, y: FieldBytes) -> Self {
        Self { x, y }
    }

    /// The x-coordinate.
    pub fn x(&self) -> &FieldBytes {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &FieldBytes {
        &self.y
    }

    pub(crate) fn from_affine(point: &AffinePoint) -> Result<Self> {
        let encoded = point.to_encoded_point(false);

        match encoded.coordinates() {
            Coordinates::Uncompressed { x, y } => Ok(Self { x: *x, y: *y }),
            _ => Err(Error::IdentityPoint),
        }
    }

    pub(crate) fn zeroize(&mut self) {
        use zeroize::Zeroize;

        self.x[..].zeroize();
        self.y[..].zeroize();
    }
}
