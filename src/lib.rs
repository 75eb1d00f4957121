//! # memory-match
//!
//! A deterministic engine for memory-matching card games with educational
//! content, difficulty tiers, scoring, hints and a leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven Time**: The engine never sleeps or spawns. Evaluation
//!    delays, hint previews and the play clock are tasks on a virtual clock
//!    that the host advances.
//!
//! 2. **Session Identity**: Every deferred task is tagged with the session
//!    generation that queued it. A task cannot touch a later session.
//!
//! 3. **Injected Collaborators**: Persistence, the remembered player name and
//!    event listeners are passed in, not reached through global state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Boards are `im::Vector`s, so session
//!   snapshots for listeners and persistence are O(1) clones.
//!
//! - **Seeded RNG**: Boards and hints come from a forkable ChaCha8 stream;
//!   the same seed deals the same boards.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, configuration
//! - `content`: Pairs, categories, the built-in catalog
//! - `board`: Cards and the board generator
//! - `scoring`: Per-match awards and the completion bonus
//! - `session`: Session rules, scheduler, timer, controller
//! - `events`: Events for the presentation layer
//! - `persistence`: Game records, gateways, leaderboard helpers
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use memory_match::{
//!     Catalog, EngineConfig, GameController, Lifecycle, MemoryGateway, MemoryProfileStore,
//! };
//!
//! let mut game = GameController::with_seed(
//!     EngineConfig::default(),
//!     Catalog::builtin(),
//!     MemoryGateway::new(),
//!     MemoryProfileStore::new(),
//!     42,
//! );
//! game.start_session("Mina", "science", "easy").unwrap();
//! assert_eq!(game.lifecycle(), Lifecycle::Active);
//! assert_eq!(game.session().unwrap().cards().len(), 12);
//!
//! game.advance(3_000);
//! assert_eq!(game.session().unwrap().elapsed_seconds(), 3);
//! ```

pub mod core;
pub mod content;
pub mod board;
pub mod scoring;
pub mod session;
pub mod events;
pub mod persistence;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, MatchKey, Generation,
    GameRng, GameRngState,
    Difficulty, EngineConfig, Timings,
};

pub use crate::content::{Catalog, CatalogData, Category, Pair};

pub use crate::board::{Card, CardFace, generate_board};

pub use crate::scoring::{ScoreInputs, per_pair_award, completion_bonus};

pub use crate::session::{
    GameController, Lifecycle,
    Session, SessionSnapshot, SessionStatus,
    RevealOutcome, Evaluation, Completion,
    Scheduler, SessionTimer, TaskKind,
};

pub use crate::events::{EventKind, GameEvent, EventSink, EventLog};

pub use crate::persistence::{
    GameRecord, LeaderboardQuery, LeaderboardEntry, Medal, RelativeAge,
    PersistenceGateway, ProfileStore,
    MemoryGateway, MemoryProfileStore,
    JsonFileGateway, JsonFileProfileStore,
};

pub use crate::error::{ConfigurationError, Error, InvalidTransition, PersistenceError, Result};
