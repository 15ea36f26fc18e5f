//! Property tests for hand arithmetic and whole-match invariants.

use proptest::prelude::*;

use dice_mafia::core::{Controller, Die, GameConfig, Player, PlayerId, HAND_SIZE};
use dice_mafia::events::GameEvent;
use dice_mafia::games::mafia::{Game, Step};
use dice_mafia::rules::RandomDirection;

fn player_holding(values: &[u8], score: u32) -> Player {
    let mut player = Player::new(PlayerId::new(1), Controller::Automated, score);
    player.remove_dice_with_value(6);
    for &value in values {
        player.push_die(Die::with_value(value).unwrap());
    }
    player
}

fn faces() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 0..40)
}

proptest! {
    #[test]
    fn prop_remove_dice_with_value(values in faces(), target in 1u8..=6) {
        let mut player = player_holding(&values, 50);
        let expected = values.iter().filter(|&&v| v == target).count();

        let removed = player.remove_dice_with_value(target);

        prop_assert_eq!(removed, expected);
        prop_assert_eq!(player.hand_size(), values.len() - expected);
        prop_assert_eq!(player.count_value(target), 0);
        // Survivors keep their order.
        let survivors: Vec<u8> = values.iter().copied().filter(|&v| v != target).collect();
        prop_assert_eq!(player.dice_values(), survivors);
    }

    #[test]
    fn prop_settle_round_end(values in faces(), score in 1u32..200) {
        let mut player = player_holding(&values, score);
        let pips: u32 = values.iter().map(|&v| u32::from(v)).sum();

        let donated = player.settle_round_end();

        prop_assert_eq!(donated, pips.min(score));
        prop_assert_eq!(player.score(), score - donated);
        prop_assert_eq!(player.score() == 0, pips >= score);
    }

    #[test]
    fn prop_reset_hand(values in faces()) {
        let mut player = player_holding(&values, 50);
        player.reset_hand();
        prop_assert_eq!(player.dice_values(), vec![6; HAND_SIZE]);
    }

    #[test]
    fn prop_match_invariants(
        total in 2usize..=8,
        humans_seed in 0usize..=8,
        rounds in 1u32..=10,
        starting_score in 1u32..=80,
        seed in any::<u64>(),
    ) {
        let humans = humans_seed % (total + 1);
        let config = GameConfig::new(total, humans)
            .with_round_limit(rounds)
            .with_starting_score(starting_score)
            .with_seed(seed);
        let mut game = Game::new(config).unwrap();
        let mut provider = RandomDirection::new(seed.rotate_left(17));
        let mut events: Vec<GameEvent> = Vec::new();
        let bank = starting_score * total as u32;

        loop {
            match game.advance(&mut provider, &mut events) {
                Step::Turn(turn) => {
                    let before = turn.hand_before + turn.next_hand_before;
                    let after = turn.hand_after + turn.next_hand_after;
                    prop_assert_eq!(after + turn.ones, before);
                }
                Step::Settled(report) => {
                    let standings = game.standings();
                    prop_assert_eq!(standings.iter().map(|&(_, s)| s).sum::<u32>(), bank);
                    prop_assert!(report.round <= rounds);
                }
                Step::Finished => break,
                _ => {}
            }
        }

        let outcome = game.outcome().unwrap();
        prop_assert!(outcome.rounds_played <= rounds);
        prop_assert!(!outcome.winners.is_empty());
        let game_overs = events.iter().filter(|e| matches!(e, GameEvent::GameOver { .. })).count();
        prop_assert_eq!(game_overs, 1);
        prop_assert!(
            matches!(events.last(), Some(GameEvent::GameOver { .. })),
            "match must end with GameOver"
        );
    }
}
