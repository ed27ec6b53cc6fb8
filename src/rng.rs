//! Uniform random sources for particle placement.
//!
//! The generator only ever needs uniform draws in [0, 1); abstracting the
//! source keeps generation deterministic under test (fixed seed) while the
//! browser demos seed from entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies uniform f32 draws in [0, 1).
pub trait RandomSource {
    fn next(&mut self) -> f32;
}

/// `SmallRng`-backed source. Two sources built from the same seed produce
/// identical draw sequences, which makes regeneration idempotent.
pub struct SeededRng(SmallRng);

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl RandomSource for SeededRng {
    fn next(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}
