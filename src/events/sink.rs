//! Event listeners.
//!
//! The engine is single-threaded, so listeners are plain `FnMut`s or
//! shared `Rc<RefCell<_>>` recorders rather than channels.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::{EventKind, GameEvent};

/// Receives engine events.
///
/// Any `FnMut(&GameEvent)` closure is a sink.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Fan-out to every registered sink.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    /// Create a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Are there no listeners?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver an event to every listener.
    pub fn emit(&mut self, event: &GameEvent) {
        log::trace!("event {}", event.kind());
        for sink in &mut self.sinks {
            sink.on_event(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").field("sinks", &self.sinks.len()).finish()
    }
}

/// Records events for later inspection.
///
/// Clones share the same buffer, so one clone can be subscribed while
/// another is kept for reading.
///
/// ```
/// use memory_match::events::{EventBus, EventKind, EventLog, GameEvent};
/// use memory_match::core::{CardId, Generation};
///
/// let log = EventLog::new();
/// let mut bus = EventBus::new();
/// bus.subscribe(log.clone());
///
/// bus.emit(&GameEvent::Flip { generation: Generation(1), card: CardId::new(0) });
/// assert_eq!(log.kinds(), vec![EventKind::Flip]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Kinds of every recorded event, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(GameEvent::kind).collect()
    }

    /// How many events of `kind` were recorded.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind() == kind).count()
    }

    /// The most recent event of `kind`.
    #[must_use]
    pub fn last_of(&self, kind: EventKind) -> Option<GameEvent> {
        self.events.borrow().iter().rev().find(|e| e.kind() == kind).cloned()
    }

    /// Remove and return every recorded event.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Is the log empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
