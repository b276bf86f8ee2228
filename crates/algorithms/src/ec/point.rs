//! Points of a short Weierstrass curve over a small prime field

use core::fmt;

/// A point on an elliptic curve: an affine coordinate pair or the point at
/// infinity.
///
/// A point does not know which curve it belongs to. Membership is checked by
/// [`EllipticCurve::is_valid`](crate::ec::EllipticCurve::is_valid).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvePoint {
    /// The point at infinity (identity element)
    #[default]
    Identity,
    /// An affine coordinate pair `(x, y)`
    Affine {
        /// x-coordinate
        x: u64,
        /// y-coordinate
        y: u64,
    },
}

impl CurvePoint {
    /// Create an affine point. No curve check is performed.
    pub const fn new(x: u64, y: u64) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// Create the identity point (point at infinity).
    pub const fn identity() -> Self {
        CurvePoint::Identity
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Identity)
    }

    /// The x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<u64> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<u64> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(u64, u64)> {
        match *self {
            CurvePoint::Identity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }
}

impl From<(u64, u64)> for CurvePoint {
    fn from((x, y): (u64, u64)) -> Self {
        CurvePoint::new(x, y)
    }
}

/// Affine points print as `(x, y)`, the identity as `O`.
impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Identity => write!(f, "O"),
            CurvePoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
