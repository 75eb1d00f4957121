//! Persistence: game records, the leaderboard, and the remembered player.
//!
//! ## Key Types
//!
//! - `GameRecord`: Write-once summary of a finished session
//! - `PersistenceGateway`: Append-only record store with leaderboard queries
//! - `ProfileStore`: Remembered player name
//! - `MemoryGateway` / `JsonFileGateway`: Gateway implementations
//! - `LeaderboardEntry`, `Medal`, `RelativeAge`: Presentation helpers

pub mod file;
pub mod gateway;
pub mod leaderboard;
pub mod memory;
pub mod profile;
pub mod record;

pub use file::{JsonFileGateway, JsonFileProfileStore};
pub use gateway::{LeaderboardQuery, PersistenceGateway, DEFAULT_LEADERBOARD_LIMIT};
pub use leaderboard::{format_duration, rank_records, LeaderboardEntry, Medal, RelativeAge};
pub use memory::{MemoryGateway, MemoryProfileStore};
pub use profile::ProfileStore;
pub use record::GameRecord;
