//! Message encodings: text to curve points and back.
//!
//! Two ways of embedding a character's code point `m` in a curve:
//!
//! - **Direct**: the point at `x = m`. Fails when no such point exists.
//! - **Koblitz**: the first point at `x = (m·K + j) mod q` for
//!   `j = 1..K-1`, recovered as `m = round(x / K)`. A character with no
//!   point in its window is skipped and reported, not fatal.
//!
//! Decoding is an approximation: it inverts Koblitz encoding only while
//! `m·K + j < q` and the rounding lands back on `m`.

pub mod error;
mod koblitz;

pub use error::{Error, Result};
pub use koblitz::{decode, encode_koblitz, koblitz_point, koblitz_table, DEFAULT_KOBLITZ_WINDOW, TABLE_ALPHABET};

use eccrypt_algorithms::{CurvePoint, EllipticCurve};
use log::debug;

/// How characters are embedded as points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Code point `m` becomes the point at `x = m`
    Direct,
    /// Koblitz embedding with offset window `K`
    Koblitz {
        /// Window size `K`; offsets `1..K` are tried
        window: u64,
    },
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Koblitz {
            window: DEFAULT_KOBLITZ_WINDOW,
        }
    }
}

/// A character that had no point and was left out of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedCharacter {
    /// Position of the character in the input, counted in chars
    pub index: usize,
    /// The character itself
    pub character: char,
}

/// Points produced from a message, plus the characters that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedMessage {
    /// One point per encoded character, in input order
    pub points: Vec<CurvePoint>,
    /// Characters without a point, in input order
    pub skipped: Vec<SkippedCharacter>,
}

impl EncodedMessage {
    /// Whether every character made it into `points`.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Direct encoding: the first point at `x = m` for every code point `m`.
///
/// Fails on the first character without a point, including code points at
/// or past `q`.
pub fn encode_direct(text: &str, curve: &EllipticCurve) -> Result<Vec<CurvePoint>> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            let x = character as u64;
            if x >= curve.q() {
                return Err(Error::UnencodableCharacter { index, character });
            }
            match curve.point_at(x) {
                Ok((p, _)) => Ok(p),
                Err(e) if e.is_not_found() => Err(Error::UnencodableCharacter { index, character }),
                Err(e) => Err(e.into()),
            }
        })
        .collect()
}

/// Inverse of [`encode_direct`]: `m = x`.
pub fn decode_direct(points: &[CurvePoint]) -> Result<String> {
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.x()
                .and_then(|x| u32::try_from(x).ok())
                .and_then(char::from_u32)
                .ok_or(Error::UndecodablePoint { index, point: *p })
        })
        .collect()
}

/// A curve paired with an encoding choice.
#[derive(Debug, Clone, Copy)]
pub struct MessageCodec<'a> {
    curve: &'a EllipticCurve,
    encoding: Encoding,
}

impl<'a> MessageCodec<'a> {
    /// Pair `curve` with `encoding`.
    pub fn new(curve: &'a EllipticCurve, encoding: Encoding) -> Self {
        MessageCodec { curve, encoding }
    }

    /// The encoding this codec applies.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode `text`. Direct encoding either yields every character or
    /// fails; Koblitz encoding may report skipped characters.
    pub fn encode(&self, text: &str) -> Result<EncodedMessage> {
        let encoded = match self.encoding {
            Encoding::Direct => EncodedMessage {
                points: encode_direct(text, self.curve)?,
                skipped: Vec::new(),
            },
            Encoding::Koblitz { window } => encode_koblitz(text, self.curve, window)?,
        };
        debug!(
            "encoded {} characters into {} points ({} skipped)",
            text.chars().count(),
            encoded.points.len(),
            encoded.skipped.len()
        );
        Ok(encoded)
    }

    /// Decode points produced by [`MessageCodec::encode`] with the same
    /// encoding.
    pub fn decode(&self, points: &[CurvePoint]) -> Result<String> {
        match self.encoding {
            Encoding::Direct => decode_direct(points),
            Encoding::Koblitz { window } => decode(points, window),
        }
    }
}
