pub mod aggregate;
pub mod filter;
pub mod graph;
pub mod options;
pub mod placement;
pub mod report;
pub mod streak;
pub mod summary;
pub mod table;

pub use aggregate::{get_dates_leaderboards, place_all};
pub use filter::{make_filtered_entries, make_filtered_entries_with};
pub use graph::{best_time_usernames_by_date, make_graph, make_graph_with};
pub use options::ScoringOptions;
pub use placement::{day_score, place_entries, DayScoreParams};
pub use report::build_report;
pub use streak::{get_longest_streak, StreakState, StreakTracker};
pub use summary::{get_average_time, get_best_average_place, get_best_time, get_highest_power_index};
pub use table::{count_dates, make_table, make_table_with};
