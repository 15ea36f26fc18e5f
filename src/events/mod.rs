//! Event reporting.
//!
//! The engine narrates a match as a stream of [`GameEvent`]s pushed into an
//! [`EventSink`]. Rendering is entirely the sink's business.
//!
//! ## Example Usage
//!
//! ```
//! use dice_mafia::core::GameConfig;
//! use dice_mafia::events::GameEvent;
//! use dice_mafia::games::mafia::Game;
//! use dice_mafia::rules::RandomDirection;
//!
//! let mut game = Game::new(GameConfig::new(3, 0).with_seed(1)).unwrap();
//! let mut provider = RandomDirection::new(2);
//! let mut log: Vec<GameEvent> = Vec::new();
//!
//! game.play(&mut provider, &mut log);
//!
//! assert!(matches!(log.last(), Some(GameEvent::GameOver { .. })));
//! ```

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, LogSink, NullSink};
