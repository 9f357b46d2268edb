//! Server side of the protocol.

use crate::{CurveContext, CurvePoint, Result};
use p256::Scalar;

impl CurveContext {
    /// Raises a client's masked point to the server secret.
    ///
    /// The point is validated before any arithmetic so that off-curve inputs
    /// cannot be used to learn anything about `server_secret`. A zero secret
    /// yields [`Error::IdentityPoint`](crate::Error::IdentityPoint).
    pub fn do_server_part(&self, point: &CurvePoint, server_secret: &Scalar) -> Result<CurvePoint> {
        let masked = self.validate(point)?;
        self.multiply(&masked, server_secret)
    }
}
