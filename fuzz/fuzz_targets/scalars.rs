#![no_main]
use elliptic_curve::{Field, PrimeField};
use libfuzzer_sys::fuzz_target;
use sphinx::{CurveContext, FieldBytes, Mask, Scalar};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let ctx = CurveContext::P256;
    let repr = FieldBytes::clone_from_slice(&data[0..32]);
    let Some(scalar) = Option::<Scalar>::from(Scalar::from_repr(repr)) else {
        assert!(Mask::from_repr(repr).is_none());
        return;
    };

    let inverse = ctx.invert_scalar(&scalar);
    if bool::from(scalar.is_zero()) {
        assert_eq!(inverse, Scalar::ZERO);
        assert!(Mask::from_repr(repr).is_none());
    } else {
        assert_eq!(inverse * scalar, Scalar::ONE);
        assert_eq!(Some(inverse), Option::<Scalar>::from(scalar.invert()));
        assert_eq!(Mask::from_repr(repr).unwrap().to_repr(), repr);
    }
});
