//! ElGamal key types

use core::fmt;

use eccrypt_algorithms::CurvePoint;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public key: the point `priv·g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey(CurvePoint);

impl PublicKey {
    /// Wrap a point received from elsewhere. Validity is checked when the key
    /// is used.
    pub fn from_point(point: CurvePoint) -> Self {
        PublicKey(point)
    }

    /// The underlying curve point.
    pub fn point(&self) -> &CurvePoint {
        &self.0
    }
}

impl AsRef<CurvePoint> for PublicKey {
    fn as_ref(&self) -> &CurvePoint {
        &self.0
    }
}

/// Private key: a scalar in `[1, n)`, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(u64);

impl PrivateKey {
    pub(crate) fn new(value: u64) -> Self {
        PrivateKey(value)
    }

    /// The scalar itself.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}
