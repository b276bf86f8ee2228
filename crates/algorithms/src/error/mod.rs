//! Error handling for prime-field and curve primitives

use std::borrow::Cow;
use std::fmt;

use eccrypt_api::Error as CoreError;

/// The error type for prime-field and curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// A search over the field came up empty
    NotFound {
        /// Operation that performed the search
        operation: &'static str,
        /// What was searched for
        details: Cow<'static, str>,
    },

    /// Modular division by a value sharing a factor with the modulus
    NotInvertible {
        /// The value that has no inverse
        value: u64,
        /// The modulus
        modulus: u64,
    },

    /// A point that must satisfy the curve equation does not
    InvalidPoint {
        /// Where the point was rejected
        context: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(name: N, reason: R) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a NotFound error
    pub fn not_found<D: Into<Cow<'static, str>>>(operation: &'static str, details: D) -> Self {
        Error::NotFound {
            operation,
            details: details.into(),
        }
    }

    /// Whether this error reports an empty search
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type for prime-field and curve primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::NotFound { operation, details } => {
                write!(f, "{} found nothing: {}", operation, details)
            }
            Error::NotInvertible { value, modulus } => {
                write!(f, "{} has no inverse modulo {}", value, modulus)
            }
            Error::InvalidPoint { context } => {
                write!(f, "Point is not on the curve: {}", context)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameters {
                context: "curve primitives",
                message: format!("{}: {}", name, reason),
            },
            Error::NotFound { operation, details } => CoreError::NotFound {
                context: operation,
                message: details.into_owned(),
            },
            Error::NotInvertible { value, modulus } => CoreError::InvalidParameters {
                context: "modular inverse",
                message: format!("{} has no inverse modulo {}", value, modulus),
            },
            Error::InvalidPoint { context } => CoreError::InvalidPoint {
                context,
                message: String::new(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "curve primitives",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
