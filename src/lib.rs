//! # eccrypt
//!
//! Elliptic-curve arithmetic over small prime fields, point-level ElGamal
//! encryption, and text-to-point message encodings.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eccrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for points, curves and ciphertexts
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`eccrypt-api`]: Error type and the `PointCipher` trait
//! - [`eccrypt-algorithms`]: Modular arithmetic, points and curves
//! - [`eccrypt-pke`]: ElGamal over curve points and the ciphertext text format
//! - [`eccrypt-codec`]: Direct and Koblitz message encodings
//!
//! This library is didactic. It uses brute-force scans over small primes
//! and makes no attempt at constant-time arithmetic.

pub use eccrypt_algorithms as algorithms;
pub use eccrypt_api as api;
pub use eccrypt_codec as codec;
pub use eccrypt_pke as pke;

/// Common imports for eccrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::PointCipher;

    // Curve arithmetic
    pub use crate::algorithms::{BasePoint, CurvePoint, EllipticCurve, GeneratorPolicy};

    // Encryption
    pub use crate::pke::{format_ciphertexts, parse_ciphertexts, Ciphertext, ElGamal, PrivateKey, PublicKey};

    // Encodings
    pub use crate::codec::{EncodedMessage, Encoding, MessageCodec};
}
