//! Prime-field arithmetic on machine integers
//!
//! Residues are `u64` values in `[0, q)`. Products are formed in `u128` so no
//! intermediate result can overflow for any `q < 2^64`.

use crate::error::{Error, Result};

/// `(a + b) mod q`
#[inline]
pub fn add_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 + b as u128) % q as u128) as u64
}

/// `(a - b) mod q`, always non-negative
#[inline]
pub fn sub_mod(a: u64, b: u64, q: u64) -> u64 {
    let (a, b) = (a % q, b % q);
    if a >= b {
        a - b
    } else {
        q - (b - a)
    }
}

/// `(a * b) mod q`
#[inline]
pub fn mul_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 * b as u128) % q as u128) as u64
}

/// Extended Euclidean algorithm.
///
/// Returns `(s, t, g)` with `a*s + b*t == g == gcd(a, b)`.
pub fn extended_gcd(a: u64, b: u64) -> (i128, i128, u64) {
    let (mut a, mut b) = (a as i128, b as i128);
    let (mut s0, mut s1, mut t0, mut t1) = (1i128, 0i128, 0i128, 1i128);
    while b > 0 {
        let (quot, rem) = (a / b, a % b);
        a = b;
        b = rem;
        (s0, s1) = (s1, s0 - quot * s1);
        (t0, t1) = (t1, t0 - quot * t1);
    }
    (s0, t0, a as u64)
}

/// Modular inverse: the `s` in `[0, q)` with `n*s ≡ 1 (mod q)`.
///
/// Fails with [`Error::NotInvertible`] when `gcd(n, q) != 1`, which includes
/// `n ≡ 0`.
pub fn inverse(n: u64, q: u64) -> Result<u64> {
    if q < 2 {
        return Err(Error::param("q", "modulus must be at least 2"));
    }
    let (s, _, g) = extended_gcd(n % q, q);
    if g != 1 {
        return Err(Error::NotInvertible { value: n, modulus: q });
    }
    Ok(s.rem_euclid(q as i128) as u64)
}

/// Both square roots of `n` modulo `q`, as `(i, q - i)`.
///
/// Scans `i = 1..q-1` and returns the first hit, so the first root is always
/// the smaller of the two. The scan is O(q) and only meant for small fields.
/// Zero has no root under this definition.
pub fn mod_sqrt(n: u64, q: u64) -> Result<(u64, u64)> {
    if n >= q {
        return Err(Error::param("n", "must be reduced modulo q"));
    }
    for i in 1..q {
        if mul_mod(i, i, q) == n {
            return Ok((i, q - i));
        }
    }
    Err(Error::not_found(
        "mod_sqrt",
        format!("{} is not a quadratic residue modulo {}", n, q),
    ))
}

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime strictly greater than `n`, or `None` on overflow.
pub fn next_prime(n: u64) -> Option<u64> {
    let mut candidate = n.checked_add(1)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}
