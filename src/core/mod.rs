//! Core game types: dice, players, configuration, RNG and errors.
//!
//! These are the leaves of the engine. They know nothing about turns or
//! rounds; the game engine in `games::mafia` drives them.

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{DirectionPolicy, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use die::{Die, DISCARD_FACE, PASS_FACE};
pub use error::{GameError, GameResult};
pub use player::{Controller, Hand, Player, PlayerId, HAND_SIZE};
pub use rng::{DieRoller, GameRng, GameRngState};
