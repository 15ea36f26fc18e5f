//! N-player verification tests.
//!
//! These tests check that no rule quietly assumes two players: every table
//! size from 2 to 8 and every human/automated mix plays to a clean finish.

use dice_mafia::core::{Controller, DirectionPolicy, GameConfig, GameError, Player, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use dice_mafia::events::{GameEvent, NullSink};
use dice_mafia::games::mafia::{Game, Step};
use dice_mafia::rules::{ByController, Direction, DirectionProvider, EndReason, FixedDirection, RandomDirection};

/// Records who was asked, always answering the same way.
struct Recording {
    direction: Direction,
    asked: Vec<PlayerId>,
}

impl Recording {
    fn new(direction: Direction) -> Self {
        Self { direction, asked: Vec::new() }
    }
}

impl DirectionProvider for Recording {
    fn choose_direction(&mut self, player: &Player) -> Direction {
        self.asked.push(player.id());
        self.direction
    }
}

// =============================================================================
// Seating
// =============================================================================

/// Every legal (total, humans) pair seats humans first, then automated players.
#[test]
fn test_roster_for_every_table() {
    for total in MIN_PLAYERS..=MAX_PLAYERS {
        for humans in 0..=total {
            let game = Game::new(GameConfig::new(total, humans).with_seed(1)).unwrap();

            assert_eq!(game.roster().len(), total);
            for (seat, player) in game.roster().iter().enumerate() {
                assert_eq!(player.id().raw() as usize, seat + 1);
                let expected = if seat < humans {
                    Controller::Human
                } else {
                    Controller::Automated
                };
                assert_eq!(player.controller(), expected);
                assert_eq!(player.score(), 50);
                assert_eq!(player.hand_size(), 2);
            }
        }
    }
}

/// Table sizes outside 2-8 are refused before anything is seated.
#[test]
fn test_table_size_bounds() {
    for total in [0, 1, 9, 12] {
        assert_eq!(
            Game::new(GameConfig::new(total, 0)).unwrap_err(),
            GameError::InvalidPlayerCount {
                count: total,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS
            }
        );
    }
}

// =============================================================================
// Full matches
// =============================================================================

/// Full automated matches at every table size keep every invariant.
#[test]
fn test_full_match_every_table_size() {
    for total in MIN_PLAYERS..=MAX_PLAYERS {
        for seed in 0..10 {
            let config = GameConfig::new(total, 0).with_seed(seed);
            let mut game = Game::new(config).unwrap();
            let mut provider = RandomDirection::new(seed ^ 0xD1CE);
            let bank = 50 * total as u32;

            loop {
                match game.advance(&mut provider, &mut NullSink) {
                    Step::Turn(turn) => {
                        assert_eq!(turn.hand_before, turn.dice_values.len());
                        assert_eq!(turn.hand_after, turn.hand_before - turn.ones - turn.sixes);
                        assert_eq!(turn.next_hand_after, turn.next_hand_before + turn.sixes);
                        assert_eq!(turn.round_won, turn.hand_after == 0);
                        assert_ne!(turn.player, turn.next_player);
                    }
                    Step::Settled(report) => {
                        let total_score: u32 = game.standings().iter().map(|&(_, s)| s).sum();
                        assert_eq!(total_score, bank);
                        assert!(game.is_active(report.winner));
                        assert!(report.round <= 10);
                    }
                    Step::Finished => break,
                    _ => {}
                }
            }

            let outcome = game.outcome().unwrap();
            assert!(!outcome.winners.is_empty());
            for winner in &outcome.winners {
                assert!(game.is_active(*winner));
            }
            match outcome.reason {
                EndReason::LastPlayerStanding => {
                    assert_eq!(game.active_players().len(), 1);
                    assert_eq!(outcome.winners.len(), 1);
                    assert_eq!(outcome.score_of(outcome.winners[0]), Some(bank));
                }
                EndReason::RoundLimit => assert_eq!(outcome.rounds_played, 10),
            }
        }
    }
}

/// Eliminated players no longer take turns or receive sixes.
#[test]
fn test_eliminated_players_are_skipped() {
    for seed in 0..40 {
        let config = GameConfig::new(6, 0).with_seed(seed).with_starting_score(8);
        let mut game = Game::new(config).unwrap();
        let mut provider = FixedDirection(Direction::Forward);

        loop {
            let active = game.active_players().to_vec();
            match game.advance(&mut provider, &mut NullSink) {
                Step::Turn(turn) => {
                    assert!(active.contains(&turn.player));
                    assert!(active.contains(&turn.next_player));
                }
                Step::Finished => break,
                _ => {}
            }
        }
        for player in game.roster() {
            assert_eq!(game.is_active(player.id()), player.score() > 0);
        }
    }
}

// =============================================================================
// Direction selection
// =============================================================================

/// By default the round's starting player picks a direction every round.
#[test]
fn test_direction_asked_every_round() {
    let mut game = Game::new(GameConfig::new(4, 0).with_seed(5)).unwrap();
    let mut provider = Recording::new(Direction::Backward);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = game.play(&mut provider, &mut events);

    assert_eq!(provider.asked.len() as u32, outcome.rounds_played);
    let starters: Vec<PlayerId> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundStarted { starting_player_id, .. } => Some(*starting_player_id),
            _ => None,
        })
        .collect();
    assert_eq!(provider.asked, starters);

    let winners: Vec<PlayerId> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundWon { player_id } => Some(*player_id),
            _ => None,
        })
        .collect();
    // Each round after the first is opened by the previous round's winner.
    assert_eq!(&starters[1..], &winners[..winners.len() - 1]);
}

/// With `FirstRoundOnly` the opening choice holds for the whole match.
#[test]
fn test_direction_asked_once() {
    let config = GameConfig::new(4, 0)
        .with_seed(5)
        .with_direction_policy(DirectionPolicy::FirstRoundOnly);
    let mut game = Game::new(config).unwrap();
    let mut provider = Recording::new(Direction::Backward);
    let mut events: Vec<GameEvent> = Vec::new();

    game.play(&mut provider, &mut events);

    assert_eq!(provider.asked.len(), 1);
    let chosen = events
        .iter()
        .filter(|e| matches!(e, GameEvent::DirectionChosen { .. }))
        .count();
    assert_eq!(chosen, 1);
    assert_eq!(game.direction(), Direction::Backward);
}

/// Humans and automated players are routed to their own providers.
#[test]
fn test_provider_routed_by_controller() {
    for seed in 0..20 {
        let mut game = Game::new(GameConfig::new(4, 2).with_seed(seed)).unwrap();
        let mut provider = ByController::new(Recording::new(Direction::Forward), Recording::new(Direction::Backward));

        game.play(&mut provider, &mut NullSink);

        let human = |id: &PlayerId| game.player(*id).unwrap().is_human();
        assert!(provider.human.asked.iter().all(human));
        assert!(!provider.automated.asked.iter().any(human));
    }
}
