//! End-of-round settlement, elimination and the end-of-match check.

use log::info;

use super::game::Game;
use super::phase::Phase;
use crate::core::{DieRoller, PlayerId};
use crate::events::{EventSink, GameEvent};
use crate::rules::{EndReason, GameOutcome};

/// What a round's settlement did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementReport {
    pub round: u32,
    pub winner: PlayerId,
    /// Amount paid by each losing player, in seat order.
    pub payments: Vec<(PlayerId, u32)>,
    /// Sum of `payments`; credited to the winner.
    pub total_donated: u32,
    /// Players who hit zero this round.
    pub eliminated: Vec<PlayerId>,
    /// Set when this settlement ended the match.
    pub outcome: Option<GameOutcome>,
}

impl<R: DieRoller> Game<R> {
    /// Settle the round `winner` just won.
    ///
    /// Every other active player rolls whatever dice they still hold and
    /// pays the total to the winner, capped at their score. Players left on
    /// zero are eliminated on the spot. The match ends when one player is
    /// left or the last round has been played; otherwise hands are dealt
    /// again and the winner opens the next round.
    pub(super) fn settle_round(&mut self, winner: PlayerId, sink: &mut impl EventSink) -> SettlementReport {
        debug_assert_eq!(self.phase, Phase::RoundSettlement { winner });
        let winner_seat = self.seat_index(winner);
        let losers: Vec<PlayerId> = self.active.iter().copied().filter(|&id| id != winner).collect();

        for &id in &losers {
            let seat = self.seat_index(id);
            if !self.roster[seat].is_empty() {
                self.roster[seat].roll_all(&mut self.roller);
                sink.emit(&GameEvent::PlayerRolled {
                    player_id: id,
                    dice_values: self.roster[seat].dice_values(),
                });
            }
        }

        // The winner's hand is empty, so their own settlement pays nothing.
        let mut total_donated = self.roster[winner_seat].settle_round_end();
        debug_assert_eq!(total_donated, 0);

        let mut payments = Vec::with_capacity(losers.len());
        for &id in &losers {
            let seat = self.seat_index(id);
            let donated = self.roster[seat].settle_round_end();
            total_donated += donated;
            payments.push((id, donated));
            sink.emit(&GameEvent::PointsTransferred {
                from_player_id: id,
                amount: donated,
                to_player_id: winner,
            });
        }
        self.roster[winner_seat].award(total_donated);
        info!("{winner} collects {total_donated} points in round {}", self.round);

        let eliminated: Vec<PlayerId> = losers
            .iter()
            .copied()
            .filter(|&id| self.roster[self.seat_index(id)].score() == 0)
            .collect();
        self.active.retain(|id| !eliminated.contains(id));
        for &id in &eliminated {
            info!("{id} is eliminated");
            sink.emit(&GameEvent::PlayerEliminated { player_id: id });
        }

        let round = self.round;
        sink.emit(&GameEvent::RoundEnded { round_number: round });

        let outcome = if self.active.len() == 1 {
            Some(self.finish(EndReason::LastPlayerStanding, sink))
        } else if self.round == self.config.round_limit {
            Some(self.finish(EndReason::RoundLimit, sink))
        } else {
            self.round += 1;
            for &id in &self.active {
                let seat = self.seat_index(id);
                self.roster[seat].reset_hand();
            }
            self.current = Some(winner);
            self.next = None;
            self.phase = Phase::DirectionSelection;
            None
        };

        SettlementReport {
            round,
            winner,
            payments,
            total_donated,
            eliminated,
            outcome,
        }
    }

    /// Close the match and announce the winners.
    fn finish(&mut self, reason: EndReason, sink: &mut impl EventSink) -> GameOutcome {
        let winners = match reason {
            EndReason::LastPlayerStanding => self.active.clone(),
            EndReason::RoundLimit => {
                let best = self
                    .active
                    .iter()
                    .map(|&id| self.roster[self.seat_index(id)].score())
                    .max()
                    .unwrap_or(0);
                self.active
                    .iter()
                    .copied()
                    .filter(|&id| self.roster[self.seat_index(id)].score() == best)
                    .collect()
            }
        };

        let outcome = GameOutcome {
            winners: winners.clone(),
            final_scores: self.standings(),
            rounds_played: self.round,
            reason,
        };
        info!("match over after {} rounds: winners {winners:?}", self.round);
        sink.emit(&GameEvent::GameOver {
            winner_ids: winners,
            final_scores: outcome.final_scores.clone(),
        });

        self.current = None;
        self.next = None;
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome.clone());
        outcome
    }
}
