//! Score computation.
//!
//! Every formula input is a snapshot of session counters at the moment
//! the award is made:
//!
//! ```text
//! base         = 1000 × score_multiplier
//! time_bonus   = max(0, time_bonus_threshold − elapsed_seconds) × 2
//! move_penalty = move_count × 5
//! streak_bonus = streak × 50
//! hint_penalty = hints_used × 100
//! raw          = base + time_bonus − move_penalty + streak_bonus − hint_penalty
//! ```
//!
//! A match earns `floor(max(100, raw) / pair_count)`. Completing the board
//! earns one more `floor(max(100, raw))` on top of the per-match awards.
//! The completion bonus is not divided by `pair_count`, so a finished
//! board is worth roughly twice the sum of its match awards.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Smallest value `raw` is clamped to before dividing.
pub const SCORE_FLOOR: f64 = 100.0;

const BASE_POINTS: f64 = 1000.0;
const TIME_BONUS_PER_SECOND: f64 = 2.0;
const MOVE_PENALTY: f64 = 5.0;
const STREAK_BONUS: f64 = 50.0;
const HINT_PENALTY: f64 = 100.0;

/// Session counters the formula reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub elapsed_seconds: u32,
    pub move_count: u32,
    pub streak: u32,
    pub hints_used: u32,
}

/// The unclamped full-formula score.
#[must_use]
pub fn raw_score(difficulty: &Difficulty, inputs: ScoreInputs) -> f64 {
    let base = BASE_POINTS * difficulty.score_multiplier;
    let time_left = difficulty.time_bonus_threshold.saturating_sub(inputs.elapsed_seconds);
    let time_bonus = f64::from(time_left) * TIME_BONUS_PER_SECOND;
    let move_penalty = f64::from(inputs.move_count) * MOVE_PENALTY;
    let streak_bonus = f64::from(inputs.streak) * STREAK_BONUS;
    let hint_penalty = f64::from(inputs.hints_used) * HINT_PENALTY;

    base + time_bonus - move_penalty + streak_bonus - hint_penalty
}

/// Points for one successful match.
#[must_use]
pub fn per_pair_award(difficulty: &Difficulty, inputs: ScoreInputs) -> u32 {
    let pairs = difficulty.pair_count.max(1) as f64;
    (raw_score(difficulty, inputs).max(SCORE_FLOOR) / pairs).floor() as u32
}

/// Lump-sum bonus added once when the board is cleared.
#[must_use]
pub fn completion_bonus(difficulty: &Difficulty, inputs: ScoreInputs) -> u32 {
    raw_score(difficulty, inputs).max(SCORE_FLOOR).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_pairs() -> Difficulty {
        Difficulty::new("t", "T", 4, 60, 1.0)
    }

    #[test]
    fn test_raw_score_terms() {
        let inputs = ScoreInputs {
            elapsed_seconds: 10,
            move_count: 3,
            streak: 2,
            hints_used: 1,
        };
        // 1000 + 100 - 15 + 100 - 100
        assert_eq!(raw_score(&four_pairs(), inputs), 1085.0);
    }

    #[test]
    fn test_time_bonus_never_negative() {
        let late = ScoreInputs {
            elapsed_seconds: 500,
            ..ScoreInputs::default()
        };
        assert_eq!(raw_score(&four_pairs(), late), 1000.0);
    }

    #[test]
    fn test_per_pair_award_floors() {
        let inputs = ScoreInputs {
            elapsed_seconds: 1,
            move_count: 1,
            streak: 1,
            hints_used: 0,
        };
        // raw = 1000 + 118 - 5 + 50 = 1163; 1163 / 4 = 290.75
        assert_eq!(per_pair_award(&four_pairs(), inputs), 290);
        assert_eq!(completion_bonus(&four_pairs(), inputs), 1163);
    }

    #[test]
    fn test_floor_of_one_hundred() {
        let terrible = ScoreInputs {
            elapsed_seconds: 999,
            move_count: 400,
            streak: 0,
            hints_used: 3,
        };
        assert!(raw_score(&four_pairs(), terrible) < 0.0);
        assert_eq!(per_pair_award(&four_pairs(), terrible), 25);
        assert_eq!(completion_bonus(&four_pairs(), terrible), 100);
    }

    #[test]
    fn test_multiplier_scales_base() {
        let expert = Difficulty::new("x", "X", 12, 300, 3.0);
        // 3000 + 600
        assert_eq!(raw_score(&expert, ScoreInputs::default()), 3600.0);
        assert_eq!(per_pair_award(&expert, ScoreInputs::default()), 300);
    }
}
