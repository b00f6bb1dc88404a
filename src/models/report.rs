use serde::{Deserialize, Serialize};

use super::{Graph, PlacedEntry, StreakRecord, UserStat};

/// Everything a group page renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub day_count: usize,
    pub entry_count: usize,
    pub table: Vec<UserStat>,
    pub graph: Graph,
    pub longest_streak: StreakRecord,
    pub best_time: Option<PlacedEntry>,
    pub best_average_place: Option<UserStat>,
    pub highest_power_index: Option<UserStat>,
    pub average_time: Option<f64>,
}
