use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::{
    models::{Filter, PlacedEntry},
    scoring::options::MIDI_WEEKDAY,
    utils::weekday_index,
};

/// Apply `filter` to placed entries, keeping their order. `today` anchors
/// the `duration` window.
pub fn make_filtered_entries(
    filter: &Filter,
    placed_entries: &[PlacedEntry],
    today: NaiveDate,
) -> Vec<PlacedEntry> {
    make_filtered_entries_with(filter, placed_entries, today, MIDI_WEEKDAY)
}

pub fn make_filtered_entries_with(
    filter: &Filter,
    placed_entries: &[PlacedEntry],
    today: NaiveDate,
    excluded_weekday: u32,
) -> Vec<PlacedEntry> {
    let cutoff = filter
        .duration
        .filter(|&days| days > 0)
        .and_then(|days| today.checked_sub_days(Days::new(u64::from(days))));

    let filtered: Vec<PlacedEntry> = placed_entries
        .iter()
        .filter(|entry| !filter.exclude_midis || weekday_index(entry.moment) != excluded_weekday)
        .filter(|entry| cutoff.map_or(true, |cutoff| entry.moment > cutoff))
        .cloned()
        .collect();

    if filtered.len() != placed_entries.len() {
        debug!(
            kept = filtered.len(),
            dropped = placed_entries.len() - filtered.len(),
            "Filtered placed entries"
        );
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::aggregate::place_all;
    use crate::models::TimeEntry;

    fn sample() -> Vec<PlacedEntry> {
        // 2024-03-09 is a Saturday
        place_all(&[
            TimeEntry::new("alice", "2024-03-07", 40.0),
            TimeEntry::new("alice", "2024-03-08", 41.0),
            TimeEntry::new("alice", "2024-03-09", 90.0),
            TimeEntry::new("bob", "2024-03-09", 80.0),
            TimeEntry::new("bob", "2024-03-10", 35.0),
        ])
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_no_options_is_identity() {
        let entries = sample();
        assert_eq!(make_filtered_entries(&Filter::default(), &entries, today()), entries);
    }

    #[test]
    fn test_zero_duration_is_identity() {
        let filter = Filter {
            exclude_midis: false,
            duration: Some(0),
        };
        let entries = sample();
        assert_eq!(make_filtered_entries(&filter, &entries, today()), entries);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_exclude_midis_drops_saturdays() {
        let filter = Filter {
            exclude_midis: true,
            duration: None,
        };
        let filtered = make_filtered_entries(&filter, &sample(), today());
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| e.date != "2024-03-09"));
    }

    #[test]
    fn test_duration_keeps_dates_strictly_after_cutoff() {
        let filter = Filter {
            exclude_midis: false,
            duration: Some(2),
        };
        let filtered = make_filtered_entries(&filter, &sample(), today());
        let dates: Vec<&str> = filtered.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-09", "2024-03-09", "2024-03-10"]);
    }

    #[test]
    fn test_both_filters_combine() {
        let filter = Filter {
            exclude_midis: true,
            duration: Some(2),
        };
        let filtered = make_filtered_entries(&filter, &sample(), today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].username, "bob");
    }

    #[test]
    fn test_custom_excluded_weekday() {
        let filter = Filter {
            exclude_midis: true,
            duration: None,
        };
        // Sunday
        let filtered = make_filtered_entries_with(&filter, &sample(), today(), 0);
        assert_eq!(filtered.len(), 4);
    }
}
