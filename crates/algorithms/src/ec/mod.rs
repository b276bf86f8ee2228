//! Elliptic Curve Primitives
//!
//! Affine arithmetic on short Weierstrass curves `y² = x³ + ax + b` over a
//! prime field small enough for its elements to fit in a `u64`. Square roots,
//! point orders and base points are found by exhaustive scans, so these
//! primitives are meant for teaching-sized fields and are neither constant-time
//! nor side-channel resistant.

pub mod arith;
mod curve;
mod point;

pub use curve::{BasePoint, EllipticCurve, GeneratorPolicy};
pub use point::CurvePoint;
