//! The match: roster, turn pointer and the round/turn state machine.

use log::{debug, info, trace};

use super::phase::{Phase, Step};
use super::settlement::SettlementReport;
use crate::core::{
    Controller, DieRoller, DirectionPolicy, GameConfig, GameError, GameResult, GameRng, Player, PlayerId,
};
use crate::events::{EventSink, GameEvent};
use crate::rules::{Direction, DirectionProvider, GameOutcome};

/// A match of dice mafia.
///
/// Owns every player and all match state; two `Game`s never share
/// anything. Generic over the die roller so hosts can replay scripted dice.
///
/// ## Example
///
/// ```
/// use dice_mafia::core::GameConfig;
/// use dice_mafia::events::NullSink;
/// use dice_mafia::games::mafia::Game;
/// use dice_mafia::rules::{Direction, FixedDirection};
///
/// let mut game = Game::new(GameConfig::new(4, 0).with_seed(7)).unwrap();
/// let outcome = game.play(&mut FixedDirection(Direction::Forward), &mut NullSink);
///
/// assert!(!outcome.winners.is_empty());
/// assert!(game.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    pub(super) config: GameConfig,
    pub(super) roster: Vec<Player>,
    /// Ids of players with a positive score, in seat order.
    pub(super) active: Vec<PlayerId>,
    pub(super) direction: Direction,
    pub(super) current: Option<PlayerId>,
    pub(super) next: Option<PlayerId>,
    pub(super) round: u32,
    pub(super) phase: Phase,
    pub(super) outcome: Option<GameOutcome>,
    pub(super) roller: R,
}

impl Game<GameRng> {
    /// Seat a new match. Dice come from the configured seed, or from the
    /// operating system when no seed is set.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_roller(config, rng)
    }

    /// Abandon this match and seat a fresh one with the same configuration.
    #[must_use]
    pub fn restart(&self) -> Self {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::seat(self.config.clone(), rng)
    }
}

impl<R: DieRoller> Game<R> {
    /// Seat a new match rolling dice with `roller`.
    pub fn with_roller(config: GameConfig, roller: R) -> GameResult<Self> {
        config.validate()?;
        Ok(Self::seat(config, roller))
    }

    fn seat(config: GameConfig, roller: R) -> Self {
        let roster: Vec<Player> = PlayerId::all(config.total_players)
            .enumerate()
            .map(|(seat, id)| {
                let controller = if seat < config.human_players {
                    Controller::Human
                } else {
                    Controller::Automated
                };
                Player::new(id, controller, config.starting_score)
            })
            .collect();
        let active = roster.iter().map(Player::id).collect();

        info!(
            "seated {} players ({} human), {} rounds, {} points each",
            config.total_players, config.human_players, config.round_limit, config.starting_score
        );

        Self {
            config,
            roster,
            active,
            direction: Direction::default(),
            current: None,
            next: None,
            round: 1,
            phase: Phase::FirstPlayerDetermination,
            outcome: None,
            roller,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whose turn it is. `None` before the opening roll-off.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// Who plays after the current player this round.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        self.next
    }

    /// Every seated player, in seat order.
    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Players still holding points, in seat order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        self.active.contains(&id)
    }

    /// Look up a player.
    pub fn player(&self, id: PlayerId) -> GameResult<&Player> {
        let seat = self.seat_of(id)?;
        Ok(&self.roster[seat])
    }

    /// Every player's score, in seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        self.roster.iter().map(|p| (p.id(), p.score())).collect()
    }

    /// Total dice held by active players.
    #[must_use]
    pub fn dice_in_play(&self) -> usize {
        self.roster
            .iter()
            .filter(|p| self.active.contains(&p.id()))
            .map(Player::hand_size)
            .sum()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Winners, once the match is over.
    #[must_use]
    pub fn winners(&self) -> Option<&[PlayerId]> {
        self.outcome.as_ref().map(|o| o.winners.as_slice())
    }

    /// The die roller, e.g. to checkpoint a `GameRng` with `state()`.
    #[must_use]
    pub fn roller(&self) -> &R {
        &self.roller
    }

    pub(super) fn seat_of(&self, id: PlayerId) -> GameResult<usize> {
        id.seat()
            .filter(|&seat| seat < self.roster.len())
            .ok_or(GameError::PlayerNotFound(id))
    }

    /// Roster index of a player known to be seated.
    pub(super) fn seat_index(&self, id: PlayerId) -> usize {
        let seat = id.seat().unwrap_or(0);
        debug_assert!(seat < self.roster.len() && self.roster[seat].id() == id);
        seat
    }

    /// The active player one step from `id` in the current direction.
    pub(super) fn player_after(&self, id: PlayerId) -> PlayerId {
        let index = self
            .active
            .iter()
            .position(|&p| p == id)
            .expect("turn pointer always refers to an active player");
        self.active[self.direction.step_from(index, self.active.len())]
    }

    // === Driving the match ===

    /// Perform exactly one transition of the state machine.
    ///
    /// Inside the turn loop, one call is one turn. Once the match is over
    /// this does nothing and returns [`Step::Finished`].
    pub fn advance(
        &mut self,
        provider: &mut impl DirectionProvider,
        sink: &mut impl EventSink,
    ) -> Step {
        match self.phase {
            Phase::FirstPlayerDetermination => Step::FirstPlayer(self.determine_first_player(sink)),
            Phase::DirectionSelection => {
                let (player, direction) = self.select_direction(provider, sink);
                Step::Direction { player, direction }
            }
            Phase::TurnLoop => Step::Turn(self.play_turn(sink)),
            Phase::RoundSettlement { winner } => Step::Settled(self.settle_round(winner, sink)),
            Phase::GameOver => Step::Finished,
        }
    }

    /// Run until the next round has been settled.
    ///
    /// Returns `None` if the match was already over.
    pub fn play_round(
        &mut self,
        provider: &mut impl DirectionProvider,
        sink: &mut impl EventSink,
    ) -> Option<SettlementReport> {
        loop {
            match self.advance(provider, sink) {
                Step::Settled(report) => return Some(report),
                Step::Finished => return None,
                _ => {}
            }
        }
    }

    /// Play the match to the end.
    pub fn play(
        &mut self,
        provider: &mut impl DirectionProvider,
        sink: &mut impl EventSink,
    ) -> GameOutcome {
        loop {
            if let Some(outcome) = &self.outcome {
                return outcome.clone();
            }
            self.advance(provider, sink);
        }
    }

    /// Opening roll-off.
    ///
    /// Everyone rolls their two placeholder dice; only the players tied for
    /// the highest total roll again, until one total stands alone. Then
    /// every hand is dealt five fresh dice for round 1.
    fn determine_first_player(&mut self, sink: &mut impl EventSink) -> PlayerId {
        let mut contenders: Vec<usize> = (0..self.roster.len()).collect();

        let first = loop {
            for &seat in &contenders {
                self.roster[seat].roll_all(&mut self.roller);
            }
            let totals: Vec<u32> = contenders.iter().map(|&s| self.roster[s].total_pips()).collect();
            trace!("roll-off totals {totals:?} for seats {contenders:?}");
            sink.emit(&GameEvent::FirstPlayerRollOff {
                contenders: contenders.iter().map(|&s| self.roster[s].id()).collect(),
                totals: totals.clone(),
            });

            let best = totals.iter().copied().max().unwrap_or(0);
            contenders = contenders
                .into_iter()
                .zip(totals)
                .filter(|&(_, total)| total == best)
                .map(|(seat, _)| seat)
                .collect();

            if let [winner] = contenders.as_slice() {
                break self.roster[*winner].id();
            }
        };

        for player in &mut self.roster {
            player.reset_hand();
        }

        info!("{first} opens the match");
        sink.emit(&GameEvent::FirstPlayerChosen { player_id: first });

        self.current = Some(first);
        self.phase = Phase::DirectionSelection;
        first
    }

    /// Ask the round's starting player for a direction and start the round.
    fn select_direction(
        &mut self,
        provider: &mut impl DirectionProvider,
        sink: &mut impl EventSink,
    ) -> (PlayerId, Direction) {
        let starter = self
            .current
            .expect("a starting player is set before direction selection");

        let ask = self.round == 1 || self.config.direction_policy == DirectionPolicy::EveryRound;
        if ask {
            let seat = self.seat_index(starter);
            self.direction = provider.choose_direction(&self.roster[seat]);
            debug!("{starter} chose {}", self.direction);
            sink.emit(&GameEvent::DirectionChosen {
                player_id: starter,
                direction: self.direction,
            });
        }

        info!("round {} starts with {starter}, playing {}", self.round, self.direction);
        sink.emit(&GameEvent::RoundStarted {
            round_number: self.round,
            starting_player_id: starter,
        });

        self.next = Some(self.player_after(starter));
        self.phase = Phase::TurnLoop;
        (starter, self.direction)
    }
}
