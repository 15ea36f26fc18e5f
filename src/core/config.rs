//! Match configuration.
//!
//! Hosts describe a match with a `GameConfig` built in the usual
//! `with_*` style and hand it to `Game::new`, which validates it. A config
//! is plain data and can be loaded from any serde format.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Fewest players a match can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match can seat.
pub const MAX_PLAYERS: usize = 8;

/// Default number of rounds before the match is decided on points.
pub const DEFAULT_ROUND_LIMIT: u32 = 10;

/// Default score every player starts with.
pub const DEFAULT_STARTING_SCORE: u32 = 50;

/// When the starting player is asked to pick a direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionPolicy {
    /// Each round's starting player picks the direction for that round.
    #[default]
    EveryRound,
    /// The first round's choice holds for the rest of the match.
    FirstRoundOnly,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seated players, human and automated (2-8).
    pub total_players: usize,

    /// How many of the seats are human. Humans take the lowest identifiers.
    pub human_players: usize,

    /// Last round to be played.
    pub round_limit: u32,

    /// Score each player starts with.
    pub starting_score: u32,

    /// When to ask for a direction.
    pub direction_policy: DirectionPolicy,

    /// Dice seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with default rules for the given seating.
    pub fn new(total_players: usize, human_players: usize) -> Self {
        Self {
            total_players,
            human_players,
            round_limit: DEFAULT_ROUND_LIMIT,
            starting_score: DEFAULT_STARTING_SCORE,
            direction_policy: DirectionPolicy::default(),
            seed: None,
        }
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = rounds;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }

    /// Set the direction policy.
    #[must_use]
    pub fn with_direction_policy(mut self, policy: DirectionPolicy) -> Self {
        self.direction_policy = policy;
        self
    }

    /// Fix the dice seed for a reproducible match.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of automated seats.
    #[must_use]
    pub fn automated_players(&self) -> usize {
        self.total_players.saturating_sub(self.human_players)
    }

    /// Check every field against the rules.
    pub fn validate(&self) -> GameResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.total_players) {
            return Err(GameError::InvalidPlayerCount {
                count: self.total_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.human_players > self.total_players {
            return Err(GameError::InvalidHumanCount {
                humans: self.human_players,
                total: self.total_players,
            });
        }
        if self.round_limit == 0 {
            return Err(GameError::InvalidRoundLimit);
        }
        if self.starting_score == 0 {
            return Err(GameError::InvalidStartingScore);
        }
        // Points only change hands, so one player can end up holding them all.
        if self.starting_score.checked_mul(self.total_players as u32).is_none() {
            return Err(GameError::StartingScoreTooLarge {
                score: self.starting_score,
                players: self.total_players,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS, 0)
    }
}
