//! A single turn: roll, discard the ones, pass the sixes.

use log::debug;

use super::game::Game;
use super::phase::Phase;
use crate::core::{DieRoller, PlayerId, DISCARD_FACE, PASS_FACE};
use crate::events::{EventSink, GameEvent};

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    /// Player who received any sixes.
    pub next_player: PlayerId,
    /// Faces rolled, before anything was removed.
    pub dice_values: Vec<u8>,
    pub ones: usize,
    pub sixes: usize,
    /// Hand sizes of the acting player before and after the turn.
    pub hand_before: usize,
    pub hand_after: usize,
    /// Hand sizes of the next player before and after the turn.
    pub next_hand_before: usize,
    pub next_hand_after: usize,
    /// The acting player emptied their hand and won the round.
    pub round_won: bool,
}

impl<R: DieRoller> Game<R> {
    /// Play the current player's turn.
    ///
    /// The current player rolls everything. Ones leave play. Each six is
    /// taken out of the hand one die at a time and a fresh die is dealt to
    /// the next player, so exactly `sixes` dice change hands. Emptying the
    /// hand wins the round; otherwise the turn passes on.
    pub(super) fn play_turn(&mut self, sink: &mut impl EventSink) -> TurnReport {
        debug_assert_eq!(self.phase, Phase::TurnLoop);
        let player = self.current.expect("turn loop always has a current player");
        let next_player = self.player_after(player);
        let seat = self.seat_index(player);
        let next_seat = self.seat_index(next_player);
        debug_assert_ne!(seat, next_seat, "a round needs at least two active players");

        let hand_before = self.roster[seat].hand_size();
        let next_hand_before = self.roster[next_seat].hand_size();

        self.roster[seat].roll_all(&mut self.roller);
        let dice_values = self.roster[seat].dice_values();
        sink.emit(&GameEvent::PlayerRolled {
            player_id: player,
            dice_values: dice_values.clone(),
        });

        let ones = self.roster[seat].count_value(DISCARD_FACE);
        let sixes = self.roster[seat].count_value(PASS_FACE);
        if ones > 0 {
            sink.emit(&GameEvent::OnesDiscarded { player_id: player, count: ones });
        }
        if sixes > 0 {
            sink.emit(&GameEvent::SixesPassed {
                player_id: player,
                count: sixes,
                to_player_id: next_player,
            });
        }

        self.roster[seat].remove_dice_with_value(DISCARD_FACE);
        for _ in 0..sixes {
            let removed = self.roster[seat].remove_one_die_with_value(PASS_FACE);
            debug_assert!(removed);
            self.roster[next_seat].add_die();
        }

        let hand_after = self.roster[seat].hand_size();
        let next_hand_after = self.roster[next_seat].hand_size();
        debug!(
            "{player} rolled {dice_values:?}: {ones} discarded, {sixes} passed to {next_player}, {hand_after} left"
        );

        let round_won = hand_after == 0;
        if round_won {
            sink.emit(&GameEvent::RoundWon { player_id: player });
            self.phase = Phase::RoundSettlement { winner: player };
        } else {
            self.current = Some(next_player);
            self.next = Some(self.player_after(next_player));
        }

        TurnReport {
            player,
            next_player,
            dice_values,
            ones,
            sixes,
            hand_before,
            hand_after,
            next_hand_before,
            next_hand_after,
            round_won,
        }
    }
}
