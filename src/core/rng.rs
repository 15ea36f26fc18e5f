//! Deterministic dice rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical sequence of faces
//! - **Forkable**: Hand out independent streams (e.g. to an automated
//!   direction chooser) without disturbing the table's dice
//! - **Serializable**: O(1) state capture and restore
//!
//! The engine never talks to `GameRng` directly. It rolls through the
//! [`DieRoller`] trait so hosts and tests can substitute scripted faces.
//!
//! ```
//! use dice_mafia::core::{DieRoller, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same dice.
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_face(), face);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::die::{MAX_FACE, MIN_FACE};

/// Source of die faces.
///
/// Implementations must return a value in `1..=6`. Every call is an
/// independent draw.
pub trait DieRoller {
    /// Roll one six-sided die.
    fn roll_face(&mut self) -> u8;
}

impl<R: DieRoller + ?Sized> DieRoller for &mut R {
    fn roll_face(&mut self) -> u8 {
        (**self).roll_face()
    }
}

/// Seeded RNG backing the table's dice.
///
/// Uses ChaCha8 for speed while keeping a uniform, reproducible stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DieRoller for GameRng {
    fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
