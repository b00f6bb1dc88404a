use tracing::debug;

use crate::{
    models::{DateTimeEntryMap, LeaderboardError, PlacedEntry, Result, TimeEntry},
    scoring::placement::place_entries,
};

/// Place every date group and flatten the results, in the map's date order.
pub fn get_dates_leaderboards(date_groups: &DateTimeEntryMap) -> Result<Vec<PlacedEntry>> {
    let mut placed = Vec::new();

    for (date, group) in date_groups.iter() {
        if group.is_empty() {
            return Err(LeaderboardError::EmptyDateGroup(date.to_string()));
        }

        let mut ordered = group.to_vec();
        // stable, so equal times keep their submission order
        ordered.sort_by(|a, b| a.time.total_cmp(&b.time));
        placed.extend(place_entries(&ordered)?);
    }

    debug!(
        dates = date_groups.len(),
        entries = placed.len(),
        "Placed date leaderboards"
    );

    Ok(placed)
}

/// Group a flat entry list by date and place each group.
pub fn place_all(entries: &[TimeEntry]) -> Result<Vec<PlacedEntry>> {
    get_dates_leaderboards(&DateTimeEntryMap::from_entries(entries))
}
