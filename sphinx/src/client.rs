//! Client side of the protocol: masking the password and deriving the key
//! from the server's response.

use crate::{CurveContext, CurvePoint, Error, Mask, Result};
use hkdf::Hkdf;
use p256::FieldBytes;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha512_256};
use zeroize::Zeroize;

/// Separates the password from the domain in the hashed input.
const SEPARATOR: &[u8] = b"|";

/// HKDF `info` label.
const KDF_INFO: &[u8] = b"Virgil";

impl CurveContext {
    /// Maps `password` and `domain` to a curve point and blinds it with a
    /// fresh random mask.
    ///
    /// The returned point is sent to the server; the [`Mask`] stays with the
    /// client and is passed to [`CurveContext::unmask_password`].
    pub fn mask_password(
        &self,
        rng: &mut impl CryptoRngCore,
        password: &str,
        domain: &str,
    ) -> Result<(CurvePoint, Mask)> {
        let mut digest = Sha512_256::new()
            .chain_update(password.as_bytes())
            .chain_update(SEPARATOR)
            .chain_update(domain.as_bytes())
            .finalize();
        let password_point = self.hash_to_affine(&digest);
        digest[..].zeroize();

        let password_point = password_point?;
        let mask = self.random_mask(rng)?;
        let masked = self.multiply(&password_point, mask.as_scalar())?;
        Ok((masked, mask))
    }

    /// Removes the mask from the server's response and fills `out` with key
    /// material derived from the result.
    ///
    /// Fails with [`Error::InvalidPoint`] if `point` is not on the curve and
    /// with [`Error::Kdf`] if `out` is longer than `255 * 32` bytes.
    pub fn unmask_password(&self, point: &CurvePoint, mask: Mask, out: &mut [u8]) -> Result<()> {
        let response = self.validate(point)?;

        let mut inverse = self.invert_scalar(mask.as_scalar());
        let unmasked = self.multiply(&response, &inverse);
        inverse.zeroize();

        let mut unmasked = unmasked?;
        let derived = derive_key(&unmasked, out);
        unmasked.zeroize();
        derived
    }
}

/// HKDF-SHA-512/256 over the minimal big-endian encodings of both
/// coordinates, concatenated.
fn derive_key(point: &CurvePoint, out: &mut [u8]) -> Result<()> {
    let x = minimal_be_bytes(point.x());
    let y = minimal_be_bytes(point.y());

    let mut ikm = [0u8; 64];
    let len = x.len() + y.len();
    ikm[..x.len()].copy_from_slice(x);
    ikm[x.len()..len].copy_from_slice(y);

    let derived = Hkdf::<Sha512_256>::new(None, &ikm[..len])
        .expand(KDF_INFO, out)
        .map_err(|_| Error::Kdf);
    ikm.zeroize();
    derived
}

/// Strips leading zero bytes.
fn minimal_be_bytes(bytes: &FieldBytes) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(bytes.len());
    &bytes[start..]
}
