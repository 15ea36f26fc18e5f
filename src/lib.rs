//! # dice-mafia
//!
//! Engine for a multi-player dice elimination game.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never prints or prompts. It asks a
//!    `DirectionProvider` for decisions and tells an `EventSink` what
//!    happened; hosts decide how that reaches a person.
//!
//! 2. **N-Player First**: Every rule works for any table of 2-8 players,
//!    any mix of human and automated seats.
//!
//! 3. **Reproducible**: Dice come from a seeded `DieRoller`. The same seed
//!    and the same direction choices replay the same match.
//!
//! ## Modules
//!
//! - `core`: Dice, players, configuration, RNG, errors
//! - `rules`: Turn direction, direction providers, match outcome
//! - `events`: Game events and sinks
//! - `games`: The round/turn engine (`games::mafia::Game`)

pub mod core;
pub mod events;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Controller, Die, DieRoller, DirectionPolicy, GameConfig, GameError, GameResult, GameRng, GameRngState, Player,
    PlayerId,
};

pub use crate::events::{EventSink, GameEvent, LogSink, NullSink};

pub use crate::games::mafia::{Game, Phase, SettlementReport, Step, TurnReport};

pub use crate::rules::{
    ByController, Direction, DirectionProvider, EndReason, FixedDirection, GameOutcome, RandomDirection,
};
