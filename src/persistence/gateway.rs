//! The persistence gateway and leaderboard queries.
//!
//! The store is append-only: records are never updated or deleted, so a
//! gateway needs no coordination beyond writing a whole record at once.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::record::GameRecord;
use crate::error::PersistenceError;

/// Default number of leaderboard rows.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;

/// Where finished sessions go.
pub trait PersistenceGateway {
    /// Store a record.
    fn append(&mut self, record: GameRecord) -> Result<(), PersistenceError>;

    /// Ranked records matching `query`.
    fn query(&self, query: &LeaderboardQuery) -> Result<Vec<GameRecord>, PersistenceError>;
}

/// Leaderboard filter.
///
/// Results are ordered by score (highest first), then time (fastest first),
/// then creation time (earliest first).
///
/// ```
/// use memory_match::persistence::LeaderboardQuery;
///
/// let query = LeaderboardQuery::new().category("math").difficulty("hard").limit(5);
/// assert_eq!(query.limit, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: usize,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            category: None,
            difficulty: None,
            limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl LeaderboardQuery {
    /// All categories and difficulties, default limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only records from this category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only records at this difficulty.
    #[must_use]
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// At most `limit` rows.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Does `record` pass the filter?
    #[must_use]
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.category.as_deref().map_or(true, |c| record.category == c)
            && self.difficulty.as_deref().map_or(true, |d| record.difficulty == d)
    }

    /// Filter, order and truncate.
    pub fn apply<'a>(&self, records: impl IntoIterator<Item = &'a GameRecord>) -> Vec<GameRecord> {
        let mut rows: Vec<GameRecord> = records
            .into_iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        rows.sort_by_key(|r| (Reverse(r.score), r.time_seconds, r.created_at));
        rows.truncate(self.limit);
        rows
    }
}
