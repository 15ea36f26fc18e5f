//! Players: identity, controller, hand of dice and score.
//!
//! ## PlayerId
//!
//! Positive identifier, `1..=8`, assigned in seating order and stable for
//! the whole match.
//!
//! ## Player
//!
//! A competitor's hand and score. All hand and score arithmetic the rules
//! need lives here; the turn and round logic lives in the game engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::die::Die;
use super::rng::DieRoller;

/// Dice a player is dealt at the start of every round.
pub const HAND_SIZE: usize = 5;

/// Dice a player rolls to decide who opens the first round.
pub const PLACEHOLDER_HAND_SIZE: usize = 2;

/// A player's dice. Most hands fit inline; a hand that has collected many
/// passed sixes spills to the heap.
pub type Hand = SmallVec<[Die; 8]>;

/// Player identifier.
///
/// Identifiers are 1-based: the first seat is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Seat index (0-based) of this player in the roster.
    ///
    /// Returns `None` for the invalid identifier 0.
    #[must_use]
    pub const fn seat(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use dice_mafia::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who makes a player's decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Automated,
}

/// A competitor.
///
/// Equality is structural (identity, hand, score and controller). It is
/// meant for membership checks, never for ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    controller: Controller,
    hand: Hand,
    score: u32,
}

impl Player {
    /// Create a player holding the two-dice placeholder hand.
    #[must_use]
    pub fn new(id: PlayerId, controller: Controller, score: u32) -> Self {
        let mut player = Self {
            id,
            controller,
            hand: Hand::new(),
            score,
        };
        for _ in 0..PLACEHOLDER_HAND_SIZE {
            player.add_die();
        }
        player
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn controller(&self) -> Controller {
        self.controller
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Dice currently held.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.hand
    }

    /// Face values currently showing, in hand order.
    #[must_use]
    pub fn dice_values(&self) -> Vec<u8> {
        self.hand.iter().map(|d| d.value()).collect()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Has this player run out of dice?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Reroll every die in hand.
    pub fn roll_all(&mut self, roller: &mut impl DieRoller) {
        for die in &mut self.hand {
            die.reroll(roller);
        }
    }

    /// Number of dice showing `value`.
    #[must_use]
    pub fn count_value(&self, value: u8) -> usize {
        self.hand.iter().filter(|d| d.value() == value).count()
    }

    /// Remove every die showing `value`. Returns how many were removed.
    pub fn remove_dice_with_value(&mut self, value: u8) -> usize {
        let before = self.hand.len();
        self.hand.retain(|d| d.value() != value);
        before - self.hand.len()
    }

    /// Remove a single die showing `value`, if any.
    pub fn remove_one_die_with_value(&mut self, value: u8) -> bool {
        match self.hand.iter().position(|d| d.value() == value) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Add a fresh die (showing 6) to the hand.
    pub fn add_die(&mut self) {
        self.hand.push(Die::new());
    }

    /// Add a die showing a given face.
    pub fn push_die(&mut self, die: Die) {
        self.hand.push(die);
    }

    /// Discard the hand and deal a fresh one of `HAND_SIZE` dice.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
        for _ in 0..HAND_SIZE {
            self.add_die();
        }
    }

    /// Sum of the faces showing. Zero for an empty hand.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.hand.iter().map(|d| u32::from(d.value())).sum()
    }

    /// Pay out at the end of a round.
    ///
    /// A player pays the value of their hand, or everything they have left
    /// if the hand is worth more than their score. Returns the amount paid.
    pub fn settle_round_end(&mut self) -> u32 {
        let pips = self.total_pips();
        let donated = pips.min(self.score);
        self.score -= donated;
        donated
    }

    /// Credit points won at settlement.
    pub fn award(&mut self, points: u32) {
        self.score += points;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for die in &self.hand {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{die}")?;
            first = false;
        }
        Ok(())
    }
}
