//! Scoring engine: per-match awards and the completion bonus.

pub mod engine;

pub use engine::{completion_bonus, per_pair_award, raw_score, ScoreInputs, SCORE_FLOOR};
