//! Error handling for PKE operations.

use eccrypt_algorithms::error::Error as PrimitiveError;
use eccrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("PKE primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("Invalid PKE parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("Malformed ciphertext text: {0}")]
    Malformed(String),
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidParameters(reason) => CoreError::InvalidParameters {
                context: "ElGamal",
                message: reason.to_string(),
            },
            Error::Malformed(reason) => CoreError::Malformed {
                context: "ElGamal ciphertext",
                message: reason,
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
