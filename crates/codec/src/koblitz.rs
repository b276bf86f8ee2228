//! Koblitz embedding of integers as curve x-coordinates

use eccrypt_algorithms::ec::arith::{add_mod, mul_mod};
use eccrypt_algorithms::{CurvePoint, EllipticCurve};
use log::warn;

use crate::error::{Error, Result};
use crate::{EncodedMessage, SkippedCharacter};

/// Default window: offsets `1..20` are tried.
pub const DEFAULT_KOBLITZ_WINDOW: u64 = 20;

/// Characters listed by [`koblitz_table`].
pub const TABLE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 ";

fn check_window(window: u64) -> Result<()> {
    if window < 2 {
        return Err(Error::InvalidWindow(window));
    }
    Ok(())
}

/// The first point at `x = (m·K + j) mod q` for `j = 1..K-1`, or `None` if
/// the whole window misses.
pub fn koblitz_point(m: u64, curve: &EllipticCurve, window: u64) -> Result<Option<CurvePoint>> {
    check_window(window)?;
    let q = curve.q();
    let base = mul_mod(m, window, q);
    for j in 1..window {
        let x = add_mod(base, j, q);
        match curve.point_at(x) {
            Ok((p, _)) => return Ok(Some(p)),
            Err(e) if e.is_not_found() => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

/// Koblitz-encode every character of `text`.
///
/// Characters whose window holds no point are collected in
/// [`EncodedMessage::skipped`]; the rest of the message is still encoded.
pub fn encode_koblitz(text: &str, curve: &EllipticCurve, window: u64) -> Result<EncodedMessage> {
    check_window(window)?;
    let mut encoded = EncodedMessage::default();
    for (index, character) in text.chars().enumerate() {
        match koblitz_point(character as u64, curve, window)? {
            Some(p) => encoded.points.push(p),
            None => {
                warn!("no point for {:?} at position {} within window {}", character, index, window);
                encoded.skipped.push(SkippedCharacter { index, character });
            }
        }
    }
    Ok(encoded)
}

/// `round(x / K)` with ties to even.
fn round_div(x: u64, window: u64) -> u64 {
    let (quot, rem) = (x / window, x % window);
    match (2 * rem).cmp(&window) {
        core::cmp::Ordering::Less => quot,
        core::cmp::Ordering::Greater => quot + 1,
        core::cmp::Ordering::Equal => quot + (quot & 1),
    }
}

/// Recover text from Koblitz-encoded points: `m = round(x / K)` per point.
///
/// Lossy by construction: offsets at or past `K/2` round up to the next
/// code point, and x-coordinates that wrapped modulo `q` are not unwrapped.
pub fn decode(points: &[CurvePoint], window: u64) -> Result<String> {
    check_window(window)?;
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.x()
                .map(|x| round_div(x, window))
                .and_then(|m| u32::try_from(m).ok())
                .and_then(char::from_u32)
                .ok_or(Error::UndecodablePoint { index, point: *p })
        })
        .collect()
}

/// Koblitz point of every character in [`TABLE_ALPHABET`].
pub fn koblitz_table(curve: &EllipticCurve, window: u64) -> Result<Vec<(char, Option<CurvePoint>)>> {
    TABLE_ALPHABET
        .chars()
        .map(|c| Ok((c, koblitz_point(c as u64, curve, window)?)))
        .collect()
}
