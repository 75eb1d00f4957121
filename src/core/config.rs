//! Engine configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `Difficulty`: How many pairs are dealt and how scoring is scaled
//! - `Timings`: Delays for match evaluation, hint previews and the session tick
//! - `EngineConfig`: Combines timings with hint and leaderboard limits
//!
//! All types deserialize from JSON with defaults for missing fields.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A difficulty tier.
///
/// Static reference data: never mutated once a session starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Stable key (`easy`, `hard`, ...), stored in game records.
    pub key: String,

    /// Display name.
    pub name: String,

    /// Number of pairs dealt onto the board.
    pub pair_count: usize,

    /// Seconds before the time bonus runs out.
    pub time_bonus_threshold: u32,

    /// Scales the base award of every match.
    pub score_multiplier: f64,

    /// Display icon.
    #[serde(default)]
    pub icon: String,
}

impl Difficulty {
    /// Create a new difficulty.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        pair_count: usize,
        time_bonus_threshold: u32,
        score_multiplier: f64,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            pair_count,
            time_bonus_threshold,
            score_multiplier,
            icon: String::new(),
        }
    }

    /// Set the display icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Number of cards on a board of this difficulty.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check that this difficulty can be played at all.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.pair_count == 0 {
            return Err(ConfigurationError::EmptyDifficulty(self.key.clone()));
        }
        if !self.score_multiplier.is_finite() || self.score_multiplier < 0.0 {
            return Err(ConfigurationError::InvalidMultiplier {
                difficulty: self.key.clone(),
                multiplier: self.score_multiplier,
            });
        }
        Ok(())
    }
}

/// Delays for the deferred work the engine schedules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Period of the session tick. One tick adds one second of play time.
    pub tick_ms: u64,

    /// How long two revealed cards stay visible before they are evaluated.
    pub evaluation_delay_ms: u64,

    /// How long a hint keeps its pair face up.
    pub hint_preview_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            evaluation_delay_ms: 1000,
            hint_preview_ms: 1500,
        }
    }
}

impl Timings {
    /// Check that the tick chain always moves the clock forward.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tick_ms == 0 {
            return Err(ConfigurationError::ZeroTickPeriod);
        }
        Ok(())
    }
}

/// Engine configuration.
///
/// ```
/// use memory_match::core::EngineConfig;
///
/// let config = EngineConfig::default().with_max_hints(5);
/// assert_eq!(config.max_hints, 5);
/// assert_eq!(config.timings.evaluation_delay_ms, 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deferred work timings.
    pub timings: Timings,

    /// Hints available per session.
    pub max_hints: u32,

    /// Consecutive mismatches before a hint is suggested.
    pub hint_suggest_after: u32,

    /// Longest accepted player name, in characters.
    pub max_name_len: usize,

    /// Default number of leaderboard rows.
    pub leaderboard_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            max_hints: 3,
            hint_suggest_after: 3,
            max_name_len: 20,
            leaderboard_limit: 20,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings a session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.timings.validate()
    }

    /// Replace the timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the number of hints per session.
    #[must_use]
    pub fn with_max_hints(mut self, max_hints: u32) -> Self {
        self.max_hints = max_hints;
        self
    }

    /// Set how many consecutive mismatches trigger a hint suggestion.
    #[must_use]
    pub fn with_hint_suggest_after(mut self, mismatches: u32) -> Self {
        self.hint_suggest_after = mismatches;
        self
    }

    /// Set the longest accepted player name.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Set the default leaderboard size.
    #[must_use]
    pub fn with_leaderboard_limit(mut self, limit: usize) -> Self {
        self.leaderboard_limit = limit;
        self
    }

    /// Trim and check a player name against the configured limits.
    pub fn normalize_player_name(&self, raw: &str) -> Result<String, ConfigurationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyPlayerName);
        }
        if name.chars().count() > self.max_name_len {
            return Err(ConfigurationError::PlayerNameTooLong { max: self.max_name_len });
        }
        Ok(name.to_string())
    }
}
