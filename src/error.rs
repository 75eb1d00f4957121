//! Error types for the memory-match engine.
//!
//! Three families, matching how each is handled:
//! - `ConfigurationError`: fatal to session creation, shown to the player
//! - `PersistenceError`: the record may not be saved, gameplay is unaffected
//! - `InvalidTransition`: a reveal, hint or lifecycle step that is not allowed
//!   right now; normal during play (double clicks) and never surfaced as an event

use thiserror::Error;

use crate::core::CardId;
use crate::session::Lifecycle;

/// Result type alias using the umbrella `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that prevent a session from being created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error(
        "category '{category}' has {available} pairs but difficulty '{difficulty}' needs {required}"
    )]
    NotEnoughPairs {
        category: String,
        difficulty: String,
        available: usize,
        required: usize,
    },

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("difficulty '{0}' deals no pairs")]
    EmptyDifficulty(String),

    #[error("difficulty '{difficulty}' has invalid score multiplier {multiplier}")]
    InvalidMultiplier { difficulty: String, multiplier: f64 },

    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("player name is empty")]
    EmptyPlayerName,

    #[error("player name is longer than {max} characters")]
    PlayerNameTooLong { max: usize },

    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// Errors from the persistence gateway or profile store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("record rejected: {0}")]
    Validation(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A state change that is not allowed in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTransition {
    #[error("no active session")]
    NotActive,

    #[error("two cards are already awaiting evaluation")]
    EvaluationPending,

    #[error("{0} is not on the board")]
    UnknownCard(CardId),

    #[error("{0} is already matched")]
    AlreadyMatched(CardId),

    #[error("{0} is already revealed")]
    AlreadyRevealed(CardId),

    #[error("no hints left")]
    HintsExhausted,

    #[error("no unmatched pair to hint")]
    NothingToHint,

    #[error("expected {expected:?}, but the game is in {actual:?}")]
    UnexpectedPhase { expected: Lifecycle, actual: Lifecycle },
}

/// Umbrella error for controller operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}
