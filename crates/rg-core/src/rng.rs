//! Deterministic run RNG.
//!
//! A growth run draws every random number (ray angles, branch gates,
//! legalization perturbations, seed placement) from a single `GrowthRng`
//! owned by the engine and passed down by `&mut`.  Two runs with the same
//! seed, field, and configuration therefore produce identical graphs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for one growth run.
pub struct GrowthRng(SmallRng);

impl GrowthRng {
    pub fn new(seed: u64) -> Self {
        GrowthRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    /// Uniform value between `a` and `b`.  `a > b` is allowed and samples the
    /// same interval, which keeps angle spans written as `(from, to)` legible.
    #[inline]
    pub fn between(&mut self, a: f32, b: f32) -> f32 {
        a + self.unit() * (b - a)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
