//! Error types for game construction and lookups.
//!
//! Only configuration and lookup failures are recoverable. Once a `Game`
//! has been built from a valid config, its transitions cannot fail.

use thiserror::Error;

use super::player::PlayerId;

/// Errors surfaced by the engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("player count must be between {min} and {max}, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("human player count must be at most {total}, got {humans}")]
    InvalidHumanCount { humans: usize, total: usize },

    #[error("round limit must be at least 1")]
    InvalidRoundLimit,

    #[error("starting score must be positive")]
    InvalidStartingScore,

    #[error("starting score {score} is too large for {players} players")]
    StartingScoreTooLarge { score: u32, players: usize },

    #[error("die value must be between 1 and 6, got {0}")]
    InvalidDieValue(u8),

    #[error("{0} is not part of this game")]
    PlayerNotFound(PlayerId),
}

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
