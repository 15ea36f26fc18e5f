//! Dice mafia: the round/turn engine.
//!
//! A match for 2-8 players, each starting with the same score:
//! - On your turn, roll all your dice
//! - Every 1 leaves play; every 6 goes to the next player
//! - Empty your hand to win the round; everyone else rolls what they
//!   still hold and pays you the total (or whatever points they have left)
//! - A player with no points is out. The match ends when one player is
//!   left, or after the last round when the highest score wins
//!
//! The round winner opens the next round and picks the direction again.

mod game;
mod phase;
mod settlement;
mod turn;

pub use game::Game;
pub use phase::{Phase, Step};
pub use settlement::SettlementReport;
pub use turn::TurnReport;
