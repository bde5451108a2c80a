//! Deterministic pseudo-random number stream for the simulation.
//!
//! Every random decision in the combat and pickup pipelines draws from a
//! single [`SimRng`] seeded at level start. Recorded demos and lockstep
//! network play replay the same event stream against the same seed, so the
//! *relative order* of draws is part of the simulation contract: two
//! implementations that consume draws in a different order diverge even
//! with identical seeds.
//!
//! Draws are byte-valued (0..=255) to match the classic table-driven PRNG
//! the rules were balanced against: pain chances are 0..=255 bytes compared
//! with `<`, coin flips mask with `& 1`, tic fuzz masks with `& 3`.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable deterministic random stream.
///
/// Backed by ChaCha8, which is reproducible across platforms. The draw
/// counter is carried alongside so that replay divergence can be narrowed
/// down to the first mismatched draw.
///
/// # Example
///
/// ```
/// use nukage_core::rng::SimRng;
///
/// let mut a = SimRng::new(1234);
/// let mut b = SimRng::new(1234);
/// assert_eq!(a.next_byte(), b.next_byte());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRng {
    rng: ChaCha8Rng,
    draws: u64,
}

impl SimRng {
    /// Creates a new stream from a master seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Draws the next byte in the stream (0..=255).
    pub fn next_byte(&mut self) -> u8 {
        self.draws += 1;
        (self.rng.next_u32() & 0xff) as u8
    }

    /// Draws a coin flip: true roughly half the time.
    pub fn coin_flip(&mut self) -> bool {
        self.next_byte() & 1 != 0
    }

    /// Returns how many draws have been consumed so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}
