pub mod models;
pub mod config;
pub mod scoring;
pub mod feed;
pub mod utils;

pub use models::{
    DateTimeEntryMap, Filter, Graph, GraphDateEntry, GroupReport, LeaderboardError, PlacedEntry,
    PowerRating, Result, StreakRecord, TimeEntry, UserStat,
};
pub use crate::config::Settings;
pub use scoring::ScoringOptions;
