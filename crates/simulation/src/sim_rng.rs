//! Deterministic simulation RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness.
//! All simulation systems should use `ResMut<SimRng>` instead of
//! `rand::thread_rng()` so that identical seeds produce identical
//! simulation output.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource for all simulation randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`), or the disaster
/// helpers below.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Bernoulli trial with success probability `p` in [0, 1].
    pub fn chance(&mut self, p: f32) -> bool {
        self.0.gen::<f32>() < p
    }

    /// Bernoulli trial whose success probability is a mean event rate
    /// (events per second) scaled by the elapsed tick time, approximating a
    /// Poisson process with one expected event per `1 / rate_per_sec`.
    pub fn chance_delta(&mut self, rate_per_sec: f64, dt: f32) -> bool {
        let p = (rate_per_sec * dt as f64).clamp(0.0, 1.0);
        self.0.gen_bool(p)
    }

    /// Uniform integer in `[-n, n]`.
    pub fn range_i32(&mut self, n: i32) -> i32 {
        self.0.gen_range(-n..=n)
    }

    /// Uniform choice from a slice. `None` only for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
