use std::collections::HashSet;
use tracing::debug;

use crate::{
    models::{PlacedEntry, PowerRating, UserStat},
    scoring::options::ScoringOptions,
    utils::{group_by, mean, round_to},
};

/// Per-user leaderboard, best power rating first.
///
/// Every rating is normalised by the number of distinct dates in
/// `placed_entries`, so days a user skipped count against them.
pub fn make_table(placed_entries: &[PlacedEntry]) -> Vec<UserStat> {
    make_table_with(placed_entries, &ScoringOptions::default())
}

pub fn make_table_with(placed_entries: &[PlacedEntry], options: &ScoringOptions) -> Vec<UserStat> {
    let day_count = count_dates(placed_entries);
    let places = options.decimal_places;

    let mut user_stats: Vec<UserStat> = group_by(placed_entries, |entry| entry.username.clone())
        .into_iter()
        .map(|(username, user_entries)| {
            let times: Vec<f64> = user_entries.iter().map(|entry| entry.time).collect();
            let user_places: Vec<f64> = user_entries.iter().map(|entry| entry.place as f64).collect();
            let total_score: f64 = user_entries.iter().map(|entry| entry.day_score).sum();

            UserStat {
                username,
                best_time: times.iter().copied().fold(f64::INFINITY, f64::min),
                average_time: round_to(mean(&times).unwrap_or_default(), places),
                first_place_finishes: user_entries.iter().filter(|entry| entry.place == 1).count()
                    as u32,
                average_place: round_to(mean(&user_places).unwrap_or_default(), places),
                games_played: user_entries.len() as u32,
                power: PowerRating {
                    rating: round_to(options.rating_scale * total_score / day_count as f64, places),
                    index: 0,
                },
            }
        })
        .collect();

    // stable: equal ratings keep first-appearance order
    user_stats.sort_by(|a, b| b.power.rating.total_cmp(&a.power.rating));
    for (i, user_stat) in user_stats.iter_mut().enumerate() {
        user_stat.power.index = i + 1;
    }

    debug!(users = user_stats.len(), days = day_count, "Built leaderboard table");

    user_stats
}

/// Number of distinct dates present.
pub fn count_dates(placed_entries: &[PlacedEntry]) -> usize {
    placed_entries
        .iter()
        .map(|entry| entry.date.as_str())
        .collect::<HashSet<_>>()
        .len()
}
