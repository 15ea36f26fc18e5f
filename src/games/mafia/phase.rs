//! Match phases and the per-transition report.

use serde::{Deserialize, Serialize};

use super::settlement::SettlementReport;
use super::turn::TurnReport;
use crate::core::PlayerId;
use crate::rules::Direction;

/// Where the match is in the round/turn state machine.
///
/// ```text
/// FirstPlayerDetermination -> DirectionSelection -> TurnLoop (repeats)
///     -> RoundSettlement -> DirectionSelection (next round) | GameOver
/// ```
///
/// Construction (`Game::new`) is the setup step; a fresh game sits in
/// `FirstPlayerDetermination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The opening roll-off has not happened yet.
    FirstPlayerDetermination,
    /// The round's starting player is about to pick a direction.
    DirectionSelection,
    /// Players are taking turns.
    TurnLoop,
    /// `winner` emptied their hand; points are about to change hands.
    RoundSettlement { winner: PlayerId },
    /// Terminal.
    GameOver,
}

impl Phase {
    #[must_use]
    pub fn is_over(self) -> bool {
        self == Phase::GameOver
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::FirstPlayerDetermination => write!(f, "first player determination"),
            Phase::DirectionSelection => write!(f, "direction selection"),
            Phase::TurnLoop => write!(f, "turn loop"),
            Phase::RoundSettlement { winner } => write!(f, "round settlement ({winner} won)"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}

/// What a single call to `Game::advance` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The roll-off finished; this player opens round 1.
    FirstPlayer(PlayerId),
    /// The starting player's direction is set for the round.
    Direction { player: PlayerId, direction: Direction },
    /// One player took a turn.
    Turn(TurnReport),
    /// A round was settled.
    Settled(SettlementReport),
    /// The match was already over; nothing changed.
    Finished,
}
