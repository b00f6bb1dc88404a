use chrono::NaiveDate;
use tracing::info;

use crate::{
    models::{Filter, GroupReport, Result, TimeEntry},
    scoring::{
        aggregate::place_all,
        filter::make_filtered_entries_with,
        graph::{best_time_usernames_by_date, make_graph_with},
        options::ScoringOptions,
        streak::get_longest_streak,
        summary::{get_average_time, get_best_average_place, get_best_time, get_highest_power_index},
        table::{count_dates, make_table_with},
    },
};

/// Run raw entries through placement, filtering, charting, ranking and the
/// summary queries.
pub fn build_report(
    entries: &[TimeEntry],
    filter: &Filter,
    current_username: Option<&str>,
    today: NaiveDate,
    options: &ScoringOptions,
) -> Result<GroupReport> {
    let placed = place_all(entries)?;
    let filtered = make_filtered_entries_with(filter, &placed, today, options.excluded_weekday);

    let graph = make_graph_with(
        &filtered,
        current_username.unwrap_or_default(),
        options.decimal_places,
    )?;
    let table = make_table_with(&filtered, options);
    let longest_streak = get_longest_streak(&best_time_usernames_by_date(&graph));

    info!(
        entries = filtered.len(),
        users = table.len(),
        days = graph.len(),
        streak = longest_streak.duration,
        "Built group report"
    );

    Ok(GroupReport {
        day_count: count_dates(&filtered),
        entry_count: filtered.len(),
        best_time: get_best_time(&filtered).cloned(),
        best_average_place: get_best_average_place(&table).cloned(),
        highest_power_index: get_highest_power_index(&table).cloned(),
        average_time: get_average_time(&filtered),
        longest_streak,
        graph,
        table,
    })
}
