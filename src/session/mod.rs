//! Sessions and the controller that drives them.
//!
//! ## Key Types
//!
//! - `Session`: One play-through (board, pending pair, counters)
//! - `GameController`: Lifecycle state machine, event fan-out, persistence
//! - `Scheduler`: Virtual clock with generation-tagged deferred tasks
//! - `SessionTimer`: The repeating per-second tick
//!
//! Rules live on `Session` (`reveal`, `evaluate_pending`, `use_hint`).
//! Timing lives in the controller, which decides when those rules run.

pub mod controller;
pub mod evaluator;
pub mod hint;
pub mod state;
pub mod timer;

pub use controller::{GameController, Lifecycle};
pub use evaluator::{Completion, Evaluation, RevealOutcome};
pub use state::{Session, SessionSnapshot, SessionStatus};
pub use timer::{DueTask, Scheduler, SessionTimer, TaskId, TaskKind};
