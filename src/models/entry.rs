use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{LeaderboardError, Result};

/// One user's completion time for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub username: String,
    /// Calendar-day key, e.g. `2024-03-09`.
    pub date: String,
    /// Seconds.
    pub time: f64,
}

impl TimeEntry {
    pub fn new(username: impl Into<String>, date: impl Into<String>, time: f64) -> Self {
        Self {
            username: username.into(),
            date: date.into(),
            time,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.time.is_finite() || self.time < 0.0 {
            return Err(LeaderboardError::InvalidTime {
                username: self.username.clone(),
                date: self.date.clone(),
                time: self.time,
            });
        }
        Ok(())
    }
}

/// A `TimeEntry` after ranking within its date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedEntry {
    pub username: String,
    pub date: String,
    pub time: f64,
    pub place: u32,
    pub moment: NaiveDate,
    pub day_score: f64,
}

/// Entries grouped by date key, keeping the order in which dates first appear.
#[derive(Debug, Clone, Default)]
pub struct DateTimeEntryMap {
    dates: Vec<String>,
    groups: HashMap<String, Vec<TimeEntry>>,
}

impl DateTimeEntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.insert(entry.clone());
        }
        map
    }

    pub fn insert(&mut self, entry: TimeEntry) {
        match self.groups.get_mut(&entry.date) {
            Some(group) => group.push(entry),
            None => {
                self.dates.push(entry.date.clone());
                self.groups.insert(entry.date.clone(), vec![entry]);
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<&[TimeEntry]> {
        self.groups.get(date).map(Vec::as_slice)
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TimeEntry])> {
        self.dates
            .iter()
            .filter_map(|date| self.get(date).map(|group| (date.as_str(), group)))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Body returned by the group times endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesPayload {
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl EntriesPayload {
    pub fn has_error(&self) -> bool {
        self.error_message
            .as_deref()
            .map(|message| !message.is_empty())
            .unwrap_or(false)
    }
}
