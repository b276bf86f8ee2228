//! Public API traits and types for the eccrypt library
//!
//! This crate provides the public API surface for the eccrypt workspace: the
//! crate-independent error type every lower-level error converts into, and
//! the trait implemented by point-level public key encryption schemes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::PointCipher;
