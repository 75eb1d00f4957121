//! Events the engine emits for the presentation layer.
//!
//! Events are fire-and-forget: a host may map them to sounds, toasts or
//! animations, and the engine behaves the same with no listener at all.

use serde::Serialize;

use crate::core::{CardId, Generation};
use crate::session::SessionSnapshot;

/// Kind of event, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Start,
    Flip,
    Match,
    Wrong,
    SuggestHint,
    Hint,
    Complete,
    RecordNotSaved,
}

impl EventKind {
    /// Stable wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::Flip => "flip",
            EventKind::Match => "match",
            EventKind::Wrong => "wrong",
            EventKind::SuggestHint => "suggest_hint",
            EventKind::Hint => "hint",
            EventKind::Complete => "complete",
            EventKind::RecordNotSaved => "record_not_saved",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new session began.
    Start {
        generation: Generation,
        player_name: String,
        category: String,
        difficulty: String,
    },

    /// A card was turned face up by the player.
    Flip { generation: Generation, card: CardId },

    /// Two revealed cards matched.
    Match {
        generation: Generation,
        cards: [CardId; 2],
        award: u32,
        streak: u32,
    },

    /// Two revealed cards did not match and were turned back.
    Wrong {
        generation: Generation,
        cards: [CardId; 2],
        wrong_streak: u32,
    },

    /// Advisory after repeated mismatches while hints remain.
    SuggestHint {
        generation: Generation,
        wrong_streak: u32,
        hints_remaining: u32,
    },

    /// A hint is showing a pair.
    Hint {
        generation: Generation,
        cards: [CardId; 2],
        hints_remaining: u32,
    },

    /// Every card is matched. Carries the final session state.
    Complete { snapshot: SessionSnapshot },

    /// The finished session could not be recorded.
    RecordNotSaved { generation: Generation, reason: String },
}

impl GameEvent {
    /// The event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Start { .. } => EventKind::Start,
            GameEvent::Flip { .. } => EventKind::Flip,
            GameEvent::Match { .. } => EventKind::Match,
            GameEvent::Wrong { .. } => EventKind::Wrong,
            GameEvent::SuggestHint { .. } => EventKind::SuggestHint,
            GameEvent::Hint { .. } => EventKind::Hint,
            GameEvent::Complete { .. } => EventKind::Complete,
            GameEvent::RecordNotSaved { .. } => EventKind::RecordNotSaved,
        }
    }

    /// The session that emitted the event.
    #[must_use]
    pub fn generation(&self) -> Generation {
        match self {
            GameEvent::Start { generation, .. }
            | GameEvent::Flip { generation, .. }
            | GameEvent::Match { generation, .. }
            | GameEvent::Wrong { generation, .. }
            | GameEvent::SuggestHint { generation, .. }
            | GameEvent::Hint { generation, .. }
            | GameEvent::RecordNotSaved { generation, .. } => *generation,
            GameEvent::Complete { snapshot } => snapshot.generation,
        }
    }
}
