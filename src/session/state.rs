//! Session state: the mutable aggregate for one play-through.
//!
//! ## Session
//!
//! Owns the board and every counter the rules read:
//! - Cards (`im::Vector`, so snapshots are O(1) clones)
//! - The pending set of up to two revealed cards awaiting evaluation
//! - Moves, elapsed seconds, score, streaks, hints used
//!
//! ## Invariants
//!
//! - The pending set never holds more than two cards
//! - `cards.len() == 2 * difficulty.pair_count`
//! - Every match key appears on exactly two cards
//! - `status == Completed` iff every card is matched
//! - `hints_used <= max_hints`
//!
//! The rules that move a session between states live in `evaluator`
//! (reveal and match) and `hint`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{generate_board, Card};
use crate::content::Category;
use crate::core::{CardId, Difficulty, EngineConfig, GameRng, Generation};
use crate::error::ConfigurationError;
use crate::scoring::ScoreInputs;

/// Where a session is in its life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Dealt but not started.
    #[default]
    Idle,
    /// Accepting reveals and hints; the timer runs.
    Active,
    /// Every card is matched. Terminal.
    Completed,
}

/// One play-through.
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) generation: Generation,
    pub(super) player_name: String,
    pub(super) category_key: String,
    pub(super) category_name: String,
    pub(super) difficulty: Difficulty,

    pub(super) cards: Vector<Card>,
    pub(super) pending: SmallVec<[CardId; 2]>,

    pub(super) move_count: u32,
    pub(super) elapsed_seconds: u32,
    pub(super) score: u32,
    pub(super) streak: u32,
    pub(super) wrong_streak: u32,
    pub(super) hints_used: u32,
    pub(super) status: SessionStatus,

    pub(super) max_hints: u32,
    pub(super) hint_suggest_after: u32,
    pub(super) hint_rng: GameRng,
}

impl Session {
    /// Deal a new session.
    ///
    /// Board dealing and hint selection use separate streams of `rng`.
    pub fn new(
        generation: Generation,
        player_name: impl Into<String>,
        category: &Category,
        difficulty: &Difficulty,
        config: &EngineConfig,
        rng: &GameRng,
    ) -> Result<Self, ConfigurationError> {
        let mut board_rng = rng.for_context("board");
        let cards = generate_board(category, difficulty, &mut board_rng)?;

        Ok(Self {
            generation,
            player_name: player_name.into(),
            category_key: category.key.clone(),
            category_name: category.name.clone(),
            difficulty: difficulty.clone(),
            cards: cards.into_iter().collect(),
            pending: SmallVec::new(),
            move_count: 0,
            elapsed_seconds: 0,
            score: 0,
            streak: 0,
            wrong_streak: 0,
            hints_used: 0,
            status: SessionStatus::Idle,
            max_hints: config.max_hints,
            hint_suggest_after: config.hint_suggest_after,
            hint_rng: rng.for_context("hint"),
        })
    }

    /// Start accepting moves. Only an idle session can start.
    pub fn start(&mut self) -> bool {
        if self.status != SessionStatus::Idle {
            return false;
        }
        self.status = SessionStatus::Active;
        true
    }

    /// Add one second of play time. No-op unless active.
    pub fn tick(&mut self) -> bool {
        if self.status != SessionStatus::Active {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    // === Accessors ===

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn category_key(&self) -> &str {
        &self.category_key
    }

    #[must_use]
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Cards revealed by the player and not yet evaluated.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn wrong_streak(&self) -> u32 {
        self.wrong_streak
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.max_hints.saturating_sub(self.hints_used)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Number of pairs already matched.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Is every card matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Counters the scoring formula reads, as of now.
    #[must_use]
    pub fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            elapsed_seconds: self.elapsed_seconds,
            move_count: self.move_count,
            streak: self.streak,
            hints_used: self.hints_used,
        }
    }

    /// Immutable copy of the session. O(1) in the number of cards.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            generation: self.generation,
            player_name: self.player_name.clone(),
            category: self.category_key.clone(),
            category_name: self.category_name.clone(),
            difficulty: self.difficulty.clone(),
            cards: self.cards.clone(),
            move_count: self.move_count,
            elapsed_seconds: self.elapsed_seconds,
            score: self.score,
            streak: self.streak,
            wrong_streak: self.wrong_streak,
            hints_used: self.hints_used,
            status: self.status,
        }
    }

    pub(super) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }
}

/// Point-in-time copy of a session, handed to listeners and persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub generation: Generation,
    pub player_name: String,
    pub category: String,
    pub category_name: String,
    pub difficulty: Difficulty,
    pub cards: Vector<Card>,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub score: u32,
    pub streak: u32,
    pub wrong_streak: u32,
    pub hints_used: u32,
    pub status: SessionStatus,
}
