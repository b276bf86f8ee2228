//! Ciphertext pairs and their persisted text form
//!
//! A message encrypts to one `(c1, c2)` pair per character. On disk each pair
//! is written as `((c1.x, c1.y), (c2.x, c2.y))` and pairs are separated by a
//! single space. Reading strips the punctuation, splits on whitespace and
//! consumes the integers four at a time.

use core::fmt;

use eccrypt_algorithms::CurvePoint;
use log::debug;

use crate::error::{Error, Result};

/// An ElGamal ciphertext: the nonce point `c1 = r·g` and the masked point
/// `c2 = m + r·pub`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ciphertext {
    c1: CurvePoint,
    c2: CurvePoint,
}

impl Ciphertext {
    /// Reassemble a ciphertext whose nonce point travelled separately.
    pub fn from_parts(c1: CurvePoint, c2: CurvePoint) -> Self {
        Ciphertext { c1, c2 }
    }

    /// The nonce point `r·g`.
    pub fn c1(&self) -> &CurvePoint {
        &self.c1
    }

    /// The masked point `m + r·pub`.
    pub fn c2(&self) -> &CurvePoint {
        &self.c2
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.c1, self.c2)
    }
}

/// Serialize ciphertexts to the persisted text form.
///
/// The identity point has no textual form, so a ciphertext containing it is
/// rejected rather than written in a shape the reader would misparse.
pub fn format_ciphertexts(ciphertexts: &[Ciphertext]) -> Result<String> {
    if ciphertexts
        .iter()
        .any(|ct| ct.c1.is_identity() || ct.c2.is_identity())
    {
        return Err(Error::InvalidParameters(
            "the point at infinity cannot be written as a coordinate pair",
        ));
    }
    let parts: Vec<String> = ciphertexts.iter().map(|ct| ct.to_string()).collect();
    Ok(parts.join(" "))
}

/// Parse the persisted text form back into ciphertexts.
///
/// Any token that is not a non-negative integer, or an integer count that
/// is not a multiple of four, is rejected as malformed. Nothing is
/// truncated.
pub fn parse_ciphertexts(text: &str) -> Result<Vec<Ciphertext>> {
    let stripped: String = text
        .chars()
        .map(|c| if matches!(c, '(' | ')' | ',') { ' ' } else { c })
        .collect();

    let values = stripped
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| Error::Malformed(format!("'{}' is not a coordinate", token)))
        })
        .collect::<Result<Vec<u64>>>()?;

    if values.len() % 4 != 0 {
        return Err(Error::Malformed(format!(
            "found {} integers, expected a multiple of 4",
            values.len()
        )));
    }

    let ciphertexts: Vec<Ciphertext> = values
        .chunks_exact(4)
        .map(|v| Ciphertext::from_parts(CurvePoint::new(v[0], v[1]), CurvePoint::new(v[2], v[3])))
        .collect();
    debug!("parsed {} ciphertexts", ciphertexts.len());
    Ok(ciphertexts)
}
