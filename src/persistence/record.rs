//! Game records: the write-once summary of a finished session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::session::SessionSnapshot;

/// A finished session as stored for the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub player_name: String,
    pub score: u32,
    pub time_seconds: u32,
    pub moves: u32,
    pub difficulty: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl GameRecord {
    /// Map a snapshot to a record.
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_name: snapshot.player_name.clone(),
            score: snapshot.score,
            time_seconds: snapshot.elapsed_seconds,
            moves: snapshot.move_count,
            difficulty: snapshot.difficulty.key.clone(),
            category: snapshot.category.clone(),
            created_at,
        }
    }

    /// Reject records a store would refuse.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        if self.player_name.trim().is_empty() {
            return Err(PersistenceError::Validation("player name is empty".into()));
        }
        if self.difficulty.is_empty() {
            return Err(PersistenceError::Validation("difficulty is empty".into()));
        }
        if self.category.is_empty() {
            return Err(PersistenceError::Validation("category is empty".into()));
        }
        Ok(())
    }
}
