//! Error handling traits for the eccrypt ecosystem

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Convert the error into [`Error`] and name the operation that failed
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }
}
