//! Turn direction and the collaborators that choose it.
//!
//! At the start of a round the engine asks a [`DirectionProvider`] which
//! way play should go. Whether that blocks on a terminal prompt, asks a
//! GUI, or answers instantly is up to the provider.

use serde::{Deserialize, Serialize};

use crate::core::{Controller, GameRng, Player};

/// Rotation of play among active players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat order (clockwise).
    #[default]
    Forward,
    /// Decreasing seat order (counter-clockwise).
    Backward,
}

impl Direction {
    /// Seat index reached after moving one step from `index` around a table
    /// of `len` seats.
    ///
    /// ```
    /// use dice_mafia::rules::Direction;
    ///
    /// assert_eq!(Direction::Forward.step_from(2, 3), 0);
    /// assert_eq!(Direction::Backward.step_from(0, 3), 2);
    /// ```
    #[must_use]
    pub fn step_from(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0 && index < len);
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Supplies the direction chosen by a round's starting player.
pub trait DirectionProvider {
    /// Ask `player` which way play should go this round.
    fn choose_direction(&mut self, player: &Player) -> Direction;
}

impl<P: DirectionProvider + ?Sized> DirectionProvider for &mut P {
    fn choose_direction(&mut self, player: &Player) -> Direction {
        (**self).choose_direction(player)
    }
}

impl<P: DirectionProvider + ?Sized> DirectionProvider for Box<P> {
    fn choose_direction(&mut self, player: &Player) -> Direction {
        (**self).choose_direction(player)
    }
}

/// Always answers the same direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedDirection(pub Direction);

impl DirectionProvider for FixedDirection {
    fn choose_direction(&mut self, _player: &Player) -> Direction {
        self.0
    }
}

/// Automated choice: a fair coin flip from its own RNG stream.
#[derive(Clone, Debug)]
pub struct RandomDirection {
    rng: GameRng,
}

impl RandomDirection {
    /// Create a chooser with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Create a chooser from an existing stream (usually a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl DirectionProvider for RandomDirection {
    fn choose_direction(&mut self, _player: &Player) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Routes the question to a human or an automated provider depending on
/// who controls the starting player.
#[derive(Clone, Debug)]
pub struct ByController<H, A> {
    pub human: H,
    pub automated: A,
}

impl<H, A> ByController<H, A> {
    #[must_use]
    pub fn new(human: H, automated: A) -> Self {
        Self { human, automated }
    }
}

impl<H: DirectionProvider, A: DirectionProvider> DirectionProvider for ByController<H, A> {
    fn choose_direction(&mut self, player: &Player) -> Direction {
        match player.controller() {
            Controller::Human => self.human.choose_direction(player),
            Controller::Automated => self.automated.choose_direction(player),
        }
    }
}
