//! Deterministic dice
//!
//! Uses a xorshift64 generator so the same seed produces the same roll
//! sequence on every platform. The generator lives inside the state tree and
//! round-trips through save/load, so a restored session continues exactly
//! where the previous one left off. Never draw from a non-deterministic
//! source in transition logic.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator for combat rolls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRng {
    state: u64,
}

impl DiceRng {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        // xorshift requires non-zero state
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Recreate a generator from a saved state
    pub fn from_state(state: u64) -> Self {
        Self::new(state)
    }

    /// Get the current state (for saving/loading)
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Draw a uniform value in [min, max]
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        let span = u64::from(max - min + 1);
        min + (self.next_u64() % span) as u32
    }

    /// Roll a twenty-sided die
    pub fn roll_d20(&mut self) -> u32 {
        self.range(1, 20)
    }
}

impl Default for DiceRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
