//! Result of a completed match.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every other player ran out of points.
    LastPlayerStanding,
    /// The round limit was reached; highest score wins.
    RoundLimit,
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Winners in seat order. More than one only on a tie at the round limit.
    pub winners: Vec<PlayerId>,
    /// Every seated player's final score, in seat order.
    pub final_scores: Vec<(PlayerId, u32)>,
    /// Number of the last round played.
    pub rounds_played: u32,
    pub reason: EndReason,
}

impl GameOutcome {
    /// Check if a player won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    /// Did the match end in a tie?
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// Final score of a player, if they were seated.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<u32> {
        self.final_scores
            .iter()
            .find(|(id, _)| *id == player)
            .map(|&(_, score)| score)
    }
}
