//! Deterministic random number generation and starting-player selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: setup takes any [`StarterSource`], so tests can pin
//!   the starting player
//!
//! ```
//! use kalah::core::{GameRng, Player, StarterSource};
//!
//! // Seeded coin flip: reproducible for a given seed
//! let first = GameRng::new(7).pick_starter();
//! assert_eq!(first, GameRng::new(7).pick_starter());
//!
//! // Fixed starter: a Player always picks itself
//! assert_eq!(Player::B.pick_starter(), Player::B);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::Player;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// Source of the starting player for a new game.
pub trait StarterSource {
    /// Pick who moves first.
    fn pick_starter(&mut self) -> Player;
}

/// Fair coin flip.
impl StarterSource for GameRng {
    fn pick_starter(&mut self) -> Player {
        if self.gen_bool(0.5) {
            Player::A
        } else {
            Player::B
        }
    }
}

/// A fixed starter.
impl StarterSource for Player {
    fn pick_starter(&mut self) -> Player {
        *self
    }
}
