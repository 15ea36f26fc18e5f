//! A single six-sided die.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::rng::DieRoller;

/// Lowest face of a die.
pub const MIN_FACE: u8 = 1;

/// Highest face of a die.
pub const MAX_FACE: u8 = 6;

/// Face that removes a die from play when rolled.
pub const DISCARD_FACE: u8 = 1;

/// Face that passes a die to the next player when rolled.
pub const PASS_FACE: u8 = 6;

/// A six-sided die showing one face.
///
/// New dice show 6 until their first roll. This is part of the game rules:
/// a freshly dealt hand is worth the maximum until it is rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    value: u8,
}

impl Die {
    /// Create a die showing 6.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: MAX_FACE }
    }

    /// Create a die showing a specific face.
    pub fn with_value(value: u8) -> GameResult<Self> {
        if (MIN_FACE..=MAX_FACE).contains(&value) {
            Ok(Self { value })
        } else {
            Err(GameError::InvalidDieValue(value))
        }
    }

    /// The face currently showing.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Roll the die.
    pub fn reroll(&mut self, roller: &mut impl DieRoller) {
        let value = roller.roll_face();
        debug_assert!((MIN_FACE..=MAX_FACE).contains(&value), "roller produced {value}");
        self.value = value;
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];
        write!(f, "{}", FACES[(self.value - MIN_FACE) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_new_die_shows_six() {
        assert_eq!(Die::new().value(), 6);
        assert_eq!(Die::default(), Die::new());
    }

    #[test]
    fn test_with_value() {
        assert_eq!(Die::with_value(3).unwrap().value(), 3);
        assert_eq!(Die::with_value(0), Err(GameError::InvalidDieValue(0)));
        assert_eq!(Die::with_value(7), Err(GameError::InvalidDieValue(7)));
    }

    #[test]
    fn test_reroll_stays_in_range() {
        let mut rng = GameRng::new(1);
        let mut die = Die::new();
        let mut seen = [false; 6];

        for _ in 0..1_000 {
            die.reroll(&mut rng);
            assert!((1..=6).contains(&die.value()));
            seen[(die.value() - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "every face should come up");
    }

    #[test]
    fn test_display() {
        assert_eq!(Die::new().to_string(), "⚅");
        assert_eq!(Die::with_value(1).unwrap().to_string(), "⚀");
    }
}
