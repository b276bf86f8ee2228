//! Validation utilities for curve primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a point lies on the curve
#[inline(always)]
pub fn point(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}
