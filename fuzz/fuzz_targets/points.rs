#![no_main]
// Untrusted coordinates must either be rejected or produce points on the curve.
use elliptic_curve::PrimeField;
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use sphinx::{CurveContext, CurvePoint, Error, FieldBytes, Scalar};

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let ctx = CurveContext::P256;
    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    let point = CurvePoint::from_coordinates(
        FieldBytes::clone_from_slice(&data[32..64]),
        FieldBytes::clone_from_slice(&data[64..96]),
    );
    let on_curve = bool::from(ctx.is_on_curve(point.x(), point.y()));
    let secret = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(
        &data[96..128],
    )))
    .unwrap_or(Scalar::ONE);

    match ctx.do_server_part(&point, &secret) {
        Ok(response) => {
            assert!(on_curve);
            assert!(bool::from(ctx.is_on_curve(response.x(), response.y())));
        }
        Err(Error::InvalidPoint) => assert!(!on_curve),
        Err(Error::IdentityPoint) => assert!(on_curve),
        Err(err) => panic!("unexpected error: {err}"),
    }

    let mask = ctx.random_mask(&mut rng).unwrap();
    let mut key = [0u8; 32];
    match ctx.unmask_password(&point, mask, &mut key) {
        Ok(()) => assert!(on_curve),
        Err(Error::InvalidPoint) => assert!(!on_curve),
        Err(err) => panic!("unexpected error: {err}"),
    }

    // Hashing arbitrary input always lands on the curve.
    let mapped = ctx.hash_to_curve(&data[128..]).unwrap();
    assert!(bool::from(ctx.is_on_curve(mapped.x(), mapped.y())));
});
