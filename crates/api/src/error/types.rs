//! Error type definitions for curve and cipher operations

/// Primary error type for eccrypt operations
///
/// Every crate in the workspace keeps its own error enum and converts into
/// this one at its public boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Out-of-range or singular curve constants, or another rejected argument
    InvalidParameters {
        context: &'static str,
        message: String,
    },

    /// No square root, no point at x, no acceptable base point, or an order
    /// beyond the search bound
    NotFound {
        context: &'static str,
        message: String,
    },

    /// Input text does not parse into the expected layout
    Malformed {
        context: &'static str,
        message: String,
    },

    /// A point that must lie on the curve does not
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for eccrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameters { message, .. } => Self::InvalidParameters { context, message },
            Self::NotFound { message, .. } => Self::NotFound { context, message },
            Self::Malformed { message, .. } => Self::Malformed { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameters { context, .. }
            | Self::NotFound { context, .. }
            | Self::Malformed { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (kind, context, message) = match self {
            Self::InvalidParameters { context, message } => ("Invalid parameters", context, message),
            Self::NotFound { context, message } => ("Not found", context, message),
            Self::Malformed { context, message } => ("Malformed input", context, message),
            Self::InvalidPoint { context, message } => ("Invalid point", context, message),
            Self::Other { context, message } => ("Error", context, message),
        };
        if message.is_empty() {
            write!(f, "{}: {}", kind, context)
        } else {
            write!(f, "{}: {}: {}", kind, context, message)
        }
    }
}
