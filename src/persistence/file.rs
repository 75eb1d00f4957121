//! JSON file stores.
//!
//! Each write replaces the whole file through a sibling temp file and a
//! rename, so a crash mid-write leaves the previous contents intact.
//! A missing file reads as empty.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::gateway::{LeaderboardQuery, PersistenceGateway};
use super::profile::ProfileStore;
use super::record::GameRecord;
use crate::error::PersistenceError;

/// Leaderboard records stored as a JSON array.
#[derive(Clone, Debug)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored record, in insertion order.
    pub fn load_all(&self) -> Result<Vec<GameRecord>, PersistenceError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn append(&mut self, record: GameRecord) -> Result<(), PersistenceError> {
        record.validate()?;
        let mut records = self.load_all()?;
        records.push(record);
        write_json_atomic(&self.path, &records)?;
        log::debug!("stored record #{} in {}", records.len(), self.path.display());
        Ok(())
    }

    fn query(&self, query: &LeaderboardQuery) -> Result<Vec<GameRecord>, PersistenceError> {
        Ok(query.apply(&self.load_all()?))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileFile {
    player_name: Option<String>,
}

/// Remembered player name stored in a small JSON document.
#[derive(Clone, Debug)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load_name(&self) -> Result<Option<String>, PersistenceError> {
        let profile: Option<ProfileFile> = read_json(&self.path)?;
        Ok(profile.and_then(|p| p.player_name))
    }

    fn save_name(&mut self, name: &str) -> Result<(), PersistenceError> {
        write_json_atomic(
            &self.path,
            &ProfileFile {
                player_name: Some(name.to_string()),
            },
        )
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let data = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
