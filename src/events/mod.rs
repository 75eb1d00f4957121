//! Event system: what the engine announces, and who listens.
//!
//! ## Key Types
//!
//! - `GameEvent`: Something that happened in a session
//! - `EventKind`: Payload-free kind with a stable wire name
//! - `EventSink`: Listener trait (closures qualify)
//! - `EventBus`: Fan-out to registered sinks
//! - `EventLog`: Shared recorder for tests and hosts that poll

pub mod event;
pub mod sink;

pub use event::{EventKind, GameEvent};
pub use sink::{EventBus, EventLog, EventSink};
