//! Event sinks.
//!
//! The engine pushes every [`GameEvent`] into an [`EventSink`] and moves
//! on. Sinks cannot influence the game.

use super::event::GameEvent;

/// Receiver for game events.
pub trait EventSink {
    /// Observe one event.
    fn emit(&mut self, event: &GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// Records every event in order.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Writes each event to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &GameEvent) {
        log::info!("{event}");
    }
}
