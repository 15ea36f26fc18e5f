//! Game event types.
//!
//! Events describe what happened at the table, in the order it happened.
//! The engine never reads them back; they exist for whatever is rendering
//! the match (console, GUI, log file).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::Direction;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One pass of the opening roll-off. `totals` pairs each contender
    /// with the sum of their two dice.
    FirstPlayerRollOff { contenders: Vec<PlayerId>, totals: Vec<u32> },

    /// The roll-off produced a unique highest total.
    FirstPlayerChosen { player_id: PlayerId },

    /// A round's starting player picked the turn direction.
    DirectionChosen { player_id: PlayerId, direction: Direction },

    /// A round began. Every active player holds a fresh hand.
    RoundStarted { round_number: u32, starting_player_id: PlayerId },

    /// A player rolled their hand. Also fired for the settlement roll.
    PlayerRolled { player_id: PlayerId, dice_values: Vec<u8> },

    /// Dice showing 1 left play.
    OnesDiscarded { player_id: PlayerId, count: usize },

    /// Dice showing 6 went to the next player.
    SixesPassed { player_id: PlayerId, count: usize, to_player_id: PlayerId },

    /// A player emptied their hand.
    RoundWon { player_id: PlayerId },

    /// Settlement payment from a losing player to the round winner.
    PointsTransferred { from_player_id: PlayerId, amount: u32, to_player_id: PlayerId },

    /// A player's score reached zero and they left the match.
    PlayerEliminated { player_id: PlayerId },

    /// Settlement for a round is complete.
    RoundEnded { round_number: u32 },

    /// The match is over.
    GameOver { winner_ids: Vec<PlayerId>, final_scores: Vec<(PlayerId, u32)> },
}

fn plural(count: usize) -> &'static str {
    if count != 1 {
        "s"
    } else {
        ""
    }
}

fn join_ids(ids: &[PlayerId]) -> String {
    ids.iter()
        .map(|id| id.raw().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::FirstPlayerRollOff { contenders, totals } => {
                write!(f, "Roll-off:")?;
                for (id, total) in contenders.iter().zip(totals) {
                    write!(f, " {id} rolls {total};")?;
                }
                Ok(())
            }
            GameEvent::FirstPlayerChosen { player_id } => {
                write!(f, "{player_id} rolled highest and opens the match.")
            }
            GameEvent::DirectionChosen { player_id, direction } => {
                write!(f, "{player_id} chooses to play {direction}.")
            }
            GameEvent::RoundStarted { round_number, starting_player_id } => {
                write!(f, "Round #{round_number} begins with {starting_player_id}.")
            }
            GameEvent::PlayerRolled { player_id, dice_values } => {
                let faces: Vec<String> = dice_values.iter().map(u8::to_string).collect();
                write!(f, "{player_id} rolls [{}].", faces.join(" "))
            }
            GameEvent::OnesDiscarded { player_id, count } => write!(
                f,
                "{player_id} rolled {count} one{} and removes {} from play.",
                plural(*count),
                if *count > 1 { "them" } else { "it" }
            ),
            GameEvent::SixesPassed { player_id, count, to_player_id } => write!(
                f,
                "{player_id} rolled {count} six{} and passes {} to {to_player_id}.",
                if *count > 1 { "es" } else { "" },
                if *count > 1 { "them" } else { "it" }
            ),
            GameEvent::RoundWon { player_id } => {
                write!(f, "{player_id} has no dice left and wins the round!")
            }
            GameEvent::PointsTransferred { from_player_id, amount, to_player_id } => write!(
                f,
                "{from_player_id} gives {amount} point{} to {to_player_id}.",
                plural(*amount as usize)
            ),
            GameEvent::PlayerEliminated { player_id } => {
                write!(f, "{player_id} is out of points and leaves the match.")
            }
            GameEvent::RoundEnded { round_number } => write!(f, "Round #{round_number} is over."),
            GameEvent::GameOver { winner_ids, .. } => match winner_ids.as_slice() {
                [single] => write!(f, "{single} wins the match!"),
                many => write!(f, "The match ends in a tie between players {}.", join_ids(many)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let event = GameEvent::SixesPassed {
            player_id: PlayerId::new(1),
            count: 2,
            to_player_id: PlayerId::new(2),
        };
        assert_eq!(event.to_string(), "Player 1 rolled 2 sixes and passes them to Player 2.");

        let event = GameEvent::GameOver {
            winner_ids: vec![PlayerId::new(1), PlayerId::new(3)],
            final_scores: vec![],
        };
        assert_eq!(event.to_string(), "The match ends in a tie between players 1, 3.");

        let event = GameEvent::PlayerRolled {
            player_id: PlayerId::new(2),
            dice_values: vec![1, 6, 3],
        };
        assert_eq!(event.to_string(), "Player 2 rolls [1 6 3].");
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::DirectionChosen {
            player_id: PlayerId::new(2),
            direction: Direction::Backward,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
