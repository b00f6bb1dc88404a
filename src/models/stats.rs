use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRating {
    pub rating: f64,
    /// 1-based rank by rating.
    pub index: usize,
}

/// A user's aggregate line in the leaderboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStat {
    pub username: String,
    pub best_time: f64,
    pub average_time: f64,
    pub first_place_finishes: u32,
    pub average_place: f64,
    pub games_played: u32,
    pub power: PowerRating,
}

/// One chart point per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDateEntry {
    pub date: String,
    pub average_time: f64,
    pub median_time: f64,
    pub best_time: f64,
    pub best_time_usernames: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_username_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_username_place: Option<u32>,
}

pub type Graph = Vec<GraphDateEntry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub duration: u32,
    pub usernames: Vec<String>,
}
