//! Scalar sampling and inversion.

use crate::{CurveContext, Error, Result};
use core::fmt;
use elliptic_curve::{Field, PrimeField};
use p256::{FieldBytes, NonZeroScalar, Scalar};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

/// Number of candidates drawn before the randomness source is declared
/// broken. An honest source fails a single draw with probability below 2⁻³².
const MAX_DRAWS: usize = 64;

impl CurveContext {
    /// Samples a uniformly random scalar in `[0, n)` by rejection sampling.
    pub fn random_scalar(&self, rng: &mut impl CryptoRngCore) -> Result<Scalar> {
        let mut bytes = FieldBytes::default();
        let mut scalar = Err(Error::Randomness);

        for _ in 0..MAX_DRAWS {
            if rng.try_fill_bytes(&mut bytes).is_err() {
                break;
            }

            if let Some(candidate) = Option::<Scalar>::from(Scalar::from_repr(bytes)) {
                scalar = Ok(candidate);
                break;
            }
        }

        bytes[..].zeroize();
        scalar
    }

    /// Samples a fresh non-zero mask.
    pub fn random_mask(&self, rng: &mut impl CryptoRngCore) -> Result<Mask> {
        for _ in 0..MAX_DRAWS {
            let scalar = self.random_scalar(rng)?;

            if let Some(scalar) = Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar)) {
                return Ok(Mask(scalar));
            }
        }

        Err(Error::Randomness)
    }

    /// Computes `scalar⁻¹ mod n` as `scalar^(n - 2)`.
    ///
    /// By Fermat's little theorem `s^(n-1) ≡ 1 mod n` for prime `n`, so
    /// `s^(n-2) · s ≡ 1`. The exponent is public and [`Field::pow`] does not
    /// branch on it. Zero maps to zero.
    ///
    /// Timing independence of the base rests on the constant-time Montgomery
    /// arithmetic of [`p256::Scalar`]. This is best effort: the compiler and
    /// the hardware offer no hard guarantee.
    pub fn invert_scalar(&self, scalar: &Scalar) -> Scalar {
        scalar.pow(self.order_minus_two)
    }
}

/// Ephemeral blinding factor applied to the password point.
///
/// A mask is produced by [`CurveContext::mask_password`] and consumed by
/// [`CurveContext::unmask_password`]; it is neither `Clone` nor `Copy`, and it
/// is zeroized on drop.
pub struct Mask(NonZeroScalar);

impl Mask {
    /// Decodes a mask previously exported with [`Mask::to_repr`].
    ///
    /// Returns `None` if `repr` is zero or not below the curve order.
    pub fn from_repr(repr: FieldBytes) -> Option<Self> {
        Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(repr)).map(Self)
    }

    /// Big-endian encoding of the mask, for callers that have to store it for
    /// the duration of a round trip.
    pub fn to_repr(&self) -> FieldBytes {
        self.as_scalar().to_repr()
    }

    pub(crate) fn as_scalar(&self) -> &Scalar {
        self.0.as_ref()
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mask").finish_non_exhaustive()
    }
}

impl Drop for Mask {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::Mask;
    use crate::{CurveContext, Error};
    use elliptic_curve::{Field, bigint::U256, ops::Reduce};
    use p256::{FieldBytes, Scalar};
    use proptest::prelude::*;
    use rand_core::{CryptoRng, OsRng, RngCore};

    /// Yields a fixed byte forever.
    struct ConstantRng(u8);

    impl RngCore for ConstantRng {
        fn next_u32(&mut self) -> u32 {
            u32::from_ne_bytes([self.0; 4])
        }

        fn next_u64(&mut self) -> u64 {
            u64::from_ne_bytes([self.0; 8])
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ConstantRng {}

    /// Entropy source that is always unavailable.
    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("entropy source unavailable")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("entropy source unavailable")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("entropy source unavailable")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(core::num::NonZeroU32::new(rand_core::Error::CUSTOM_START)
                .unwrap()
                .into())
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn random_scalar_rng_failure() {
        let ctx = CurveContext::P256;
        assert_eq!(ctx.random_scalar(&mut FailingRng), Err(Error::Randomness));
        assert_eq!(
            ctx.random_mask(&mut FailingRng).unwrap_err(),
            Error::Randomness
        );
    }

    #[test]
    fn random_scalar_rejects_out_of_range() {
        // 0xff..ff is above the order on every draw.
        let ctx = CurveContext::P256;
        assert_eq!(
            ctx.random_scalar(&mut ConstantRng(0xff)),
            Err(Error::Randomness)
        );
    }

    #[test]
    fn random_mask_rejects_zero() {
        let ctx = CurveContext::P256;
        assert_eq!(ctx.random_scalar(&mut ConstantRng(0)), Ok(Scalar::ZERO));
        assert_eq!(
            ctx.random_mask(&mut ConstantRng(0)).unwrap_err(),
            Error::Randomness
        );
    }

    #[test]
    fn random_masks_differ() {
        let ctx = CurveContext::P256;
        let first = ctx.random_mask(&mut OsRng).unwrap();
        let second = ctx.random_mask(&mut OsRng).unwrap();
        assert_ne!(first.to_repr(), second.to_repr());
    }

    #[test]
    fn invert_one() {
        let ctx = CurveContext::P256;
        assert_eq!(ctx.invert_scalar(&Scalar::ONE), Scalar::ONE);
    }

    #[test]
    fn invert_zero() {
        let ctx = CurveContext::P256;
        assert_eq!(ctx.invert_scalar(&Scalar::ZERO), Scalar::ZERO);
    }

    #[test]
    fn mask_repr() {
        let ctx = CurveContext::P256;
        let mask = ctx.random_mask(&mut OsRng).unwrap();
        let decoded = Mask::from_repr(mask.to_repr()).unwrap();
        assert_eq!(decoded.to_repr(), mask.to_repr());

        assert!(Mask::from_repr(FieldBytes::default()).is_none());
        assert!(Mask::from_repr([0xff; 32].into()).is_none());
    }

    proptest! {
        #[test]
        fn invert_round_trip(bytes in any::<[u8; 32]>()) {
            let ctx = CurveContext::P256;
            let scalar = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(&bytes));
            prop_assume!(!bool::from(scalar.is_zero()));

            let inverse = ctx.invert_scalar(&scalar);
            prop_assert_eq!(inverse * scalar, Scalar::ONE);
            prop_assert_eq!(inverse, scalar.invert().unwrap());
        }
    }
}
