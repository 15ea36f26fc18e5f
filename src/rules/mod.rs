//! Rule-level collaborators and results.
//!
//! - [`Direction`] and the [`DirectionProvider`] contract the engine uses to
//!   ask a round's starting player which way play goes
//! - [`GameOutcome`] describing how a match ended
//!
//! The engine calls into providers but never interprets how they decide.

pub mod direction;
pub mod outcome;

pub use direction::{ByController, Direction, DirectionProvider, FixedDirection, RandomDirection};
pub use outcome::{EndReason, GameOutcome};
