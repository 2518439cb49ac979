//! Deterministic random stream shared by all stochastic decisions.
//!
//! # Determinism strategy
//!
//! The whole simulation draws from ONE sequential stream, seeded once when
//! the engine is built.  Occupants consume draws in ascending `OccupantId`
//! order every tick, so the same seed and configuration always reproduce
//! the same run.  `reset` does not re-seed; a reset engine continues the
//! stream where it left off.
//!
//! Policies take `&mut impl RandomSource` rather than a concrete RNG so
//! tests can substitute scripted draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random draws.
pub trait RandomSource {
    /// A float uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// An index uniformly distributed in `[0, len)`.
    ///
    /// # Panics
    /// Implementations may panic if `len == 0`; callers guard against it.
    fn next_index(&mut self, len: usize) -> usize;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level seeded RNG.
///
/// Used only from the single driver thread that owns the engine.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}
