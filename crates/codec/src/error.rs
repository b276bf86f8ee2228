//! Error handling for message encodings.

use eccrypt_algorithms::error::Error as PrimitiveError;
use eccrypt_algorithms::CurvePoint;
use eccrypt_api::error::Error as CoreError;

/// Error type for message encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("codec primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("character {character:?} at position {index} has no point on the curve")]
    UnencodableCharacter { index: usize, character: char },

    #[error("Koblitz window must be at least 2, got {0}")]
    InvalidWindow(u64),

    #[error("point {index} ({point}) does not decode to a character")]
    UndecodablePoint { index: usize, point: CurvePoint },
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            err @ Error::UnencodableCharacter { .. } => CoreError::NotFound {
                context: "message encoding",
                message: err.to_string(),
            },
            Error::InvalidWindow(window) => CoreError::InvalidParameters {
                context: "Koblitz encoding",
                message: format!("window {} is smaller than 2", window),
            },
            err @ Error::UndecodablePoint { .. } => CoreError::Malformed {
                context: "message decoding",
                message: err.to_string(),
            },
        }
    }
}

impl Error {
    /// Whether the error means some character or root does not exist, as
    /// opposed to bad input.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Primitive(e) => e.is_not_found(),
            Error::UnencodableCharacter { .. } => true,
            _ => false,
        }
    }
}

/// Result type for message encoding and decoding.
pub type Result<T> = core::result::Result<T, Error>;
