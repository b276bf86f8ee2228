//! Trait definitions for eccrypt schemes

pub mod pke;

pub use pke::PointCipher;
