//! Deterministic random number generation.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Create a seeded generator.
///
/// Any [`rand::Rng`] works with the samplers in this crate; this helper
/// returns the small, fast generator used throughout the tests so that
/// results can be reproduced from a single `u64`.
pub fn create_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
