//! Leaderboard presentation helpers.
//!
//! Ranking, medals for the podium, `m:ss` times and coarse record ages.

use chrono::{DateTime, NaiveDate, Utc};

use super::record::GameRecord;

/// Podium position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based rank, if it is on the podium.
    #[must_use]
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub medal: Option<Medal>,
    pub record: GameRecord,
}

impl LeaderboardEntry {
    /// Time column, `m:ss`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format_duration(self.record.time_seconds)
    }

    /// Date column relative to `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> RelativeAge {
        RelativeAge::between(self.record.created_at, now)
    }
}

/// Number already-ordered records from 1.
#[must_use]
pub fn rank_records(records: Vec<GameRecord>) -> Vec<LeaderboardEntry> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| LeaderboardEntry {
            rank: i + 1,
            medal: Medal::for_rank(i + 1),
            record,
        })
        .collect()
}

/// Format seconds as `m:ss`.
///
/// ```
/// use memory_match::persistence::format_duration;
///
/// assert_eq!(format_duration(75), "1:15");
/// assert_eq!(format_duration(5), "0:05");
/// ```
#[must_use]
pub fn format_duration(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// How long ago a record was set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeAge {
    /// Less than an hour.
    JustNow,
    /// Less than a day.
    HoursAgo(i64),
    /// Less than a week.
    DaysAgo(i64),
    /// A week or more: show the date.
    On(NaiveDate),
}

impl RelativeAge {
    /// Age of `created_at` as seen at `now`.
    #[must_use]
    pub fn between(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let hours = (now - created_at).num_hours();
        if hours < 1 {
            RelativeAge::JustNow
        } else if hours < 24 {
            RelativeAge::HoursAgo(hours)
        } else if hours < 24 * 7 {
            RelativeAge::DaysAgo(hours / 24)
        } else {
            RelativeAge::On(created_at.date_naive())
        }
    }
}

impl std::fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelativeAge::JustNow => f.write_str("just now"),
            RelativeAge::HoursAgo(1) => f.write_str("1 hour ago"),
            RelativeAge::HoursAgo(h) => write!(f, "{} hours ago", h),
            RelativeAge::DaysAgo(1) => f.write_str("1 day ago"),
            RelativeAge::DaysAgo(d) => write!(f, "{} days ago", d),
            RelativeAge::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}
