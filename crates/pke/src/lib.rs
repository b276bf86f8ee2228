//! Public Key Encryption (PKE) schemes for the eccrypt library.
//!
//! Currently a single scheme: ElGamal over the points of a small elliptic
//! curve, where the plaintext is itself a curve point.

pub mod elgamal;
pub mod error;

// Re-export key items
pub use elgamal::{format_ciphertexts, parse_ciphertexts, Ciphertext, ElGamal, PrivateKey, PublicKey};
pub use error::{Error, Result};
