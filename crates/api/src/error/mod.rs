//! Error handling for the eccrypt ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl std::error::Error for Error {}
