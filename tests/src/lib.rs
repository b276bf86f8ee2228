//! Shared fixtures for the eccrypt integration tests

use eccrypt::algorithms::{EllipticCurve, GeneratorPolicy};
use eccrypt::pke::ElGamal;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// `y² = x³ + 9x + 7 (mod 4093)`, the curve the command-line tool defaults to.
/// It has 4093 points, so every point other than the identity has order 4093.
pub fn demo_curve() -> EllipticCurve {
    EllipticCurve::new(9, 7, 4093).expect("demo curve parameters are valid")
}

/// `y² = x³ + 3x + 1 (mod 7)`: small enough to enumerate by hand.
pub fn small_curve() -> EllipticCurve {
    EllipticCurve::new(3, 1, 7).expect("small curve parameters are valid")
}

/// ElGamal on the demo curve with the first base point found by scanning x.
pub fn demo_cipher() -> ElGamal {
    ElGamal::from_curve(demo_curve(), &GeneratorPolicy::default()).expect("demo curve has a base point")
}

/// Deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
