use crate::{
    models::{Graph, GraphDateEntry, PlacedEntry, Result},
    utils::{format_date, group_by, mean, median, round_to},
};

/// One summary point per date, oldest first. `current_username` selects
/// whose time and place are attached to each point.
pub fn make_graph(placed_entries: &[PlacedEntry], current_username: &str) -> Result<Graph> {
    make_graph_with(placed_entries, current_username, 2)
}

pub fn make_graph_with(
    placed_entries: &[PlacedEntry],
    current_username: &str,
    decimal_places: u32,
) -> Result<Graph> {
    let mut date_groups = group_by(placed_entries, |entry| entry.date.clone());
    // every group is non-empty, and sort_by_key is stable for same-day keys
    date_groups.sort_by_key(|(_, group)| group[0].moment);

    date_groups
        .into_iter()
        .map(|(date, group)| {
            let times: Vec<f64> = group.iter().map(|entry| entry.time).collect();
            let best_time = times.iter().copied().fold(f64::INFINITY, f64::min);
            let best_time_usernames = group
                .iter()
                .filter(|entry| entry.time == best_time)
                .map(|entry| entry.username.clone())
                .collect();
            let current_entry = group
                .iter()
                .find(|entry| entry.username == current_username);

            Ok(GraphDateEntry {
                date: format_date(&date)?,
                average_time: round_to(mean(&times).unwrap_or_default(), decimal_places),
                median_time: median(&times),
                best_time,
                best_time_usernames,
                current_username_time: current_entry.map(|entry| entry.time),
                current_username_place: current_entry.map(|entry| entry.place),
            })
        })
        .collect()
}

/// The per-date winner sets, in graph order.
pub fn best_time_usernames_by_date(graph: &[GraphDateEntry]) -> Vec<Vec<String>> {
    graph
        .iter()
        .map(|entry| entry.best_time_usernames.clone())
        .collect()
}
