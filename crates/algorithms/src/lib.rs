//! Prime-field and elliptic curve primitives
//!
//! This crate provides the arithmetic layer of eccrypt:
//!
//! - [`ec::arith`]: modular inverse by extended Euclid, modular square roots
//!   by exhaustive scan, primality helpers
//! - [`CurvePoint`]: a coordinate pair or the point at infinity
//! - [`EllipticCurve`]: point validation, point lookup by x-coordinate,
//!   negation, the group law, double-and-add scalar multiplication, point
//!   order and base-point discovery
//!
//! Every operation is a pure function of its inputs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{BasePoint, CurvePoint, EllipticCurve, GeneratorPolicy};
