//! In-memory stores.

use super::gateway::{LeaderboardQuery, PersistenceGateway};
use super::profile::ProfileStore;
use super::record::GameRecord;
use crate::error::PersistenceError;

/// Records kept in a `Vec` for the life of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    records: Vec<GameRecord>,
}

impl MemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored record, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn append(&mut self, record: GameRecord) -> Result<(), PersistenceError> {
        record.validate()?;
        self.records.push(record);
        Ok(())
    }

    fn query(&self, query: &LeaderboardQuery) -> Result<Vec<GameRecord>, PersistenceError> {
        Ok(query.apply(&self.records))
    }
}

/// Remembered player name, kept in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryProfileStore {
    name: Option<String>,
}

impl MemoryProfileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already remembers `name`.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load_name(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.name.clone())
    }

    fn save_name(&mut self, name: &str) -> Result<(), PersistenceError> {
        self.name = Some(name.to_string());
        Ok(())
    }
}
