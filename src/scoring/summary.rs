use crate::{
    models::{PlacedEntry, UserStat},
    utils::mean,
};

/// Fastest entry overall; the most recent date wins a tie.
pub fn get_best_time(placed_entries: &[PlacedEntry]) -> Option<&PlacedEntry> {
    placed_entries.iter().reduce(|best, entry| {
        if entry.time < best.time || (entry.time == best.time && entry.date > best.date) {
            entry
        } else {
            best
        }
    })
}

/// Lowest average place; the first one wins a tie.
pub fn get_best_average_place(table: &[UserStat]) -> Option<&UserStat> {
    table.iter().reduce(|best, user_stat| {
        if user_stat.average_place < best.average_place {
            user_stat
        } else {
            best
        }
    })
}

/// Expects `table` as returned by `make_table`.
pub fn get_highest_power_index(table: &[UserStat]) -> Option<&UserStat> {
    table.first()
}

pub fn get_average_time(placed_entries: &[PlacedEntry]) -> Option<f64> {
    let times: Vec<f64> = placed_entries.iter().map(|entry| entry.time).collect();
    mean(&times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeEntry;
    use crate::scoring::{aggregate::place_all, table::make_table};

    fn placed() -> Vec<PlacedEntry> {
        place_all(&[
            TimeEntry::new("alice", "2024-03-04", 25.0),
            TimeEntry::new("bob", "2024-03-04", 30.0),
            TimeEntry::new("bob", "2024-03-06", 25.0),
            TimeEntry::new("alice", "2024-03-06", 45.0),
            TimeEntry::new("carol", "2024-03-05", 60.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_best_time_prefers_latest_date_on_tie() {
        let entries = placed();
        let best = get_best_time(&entries).unwrap();
        assert_eq!(best.time, 25.0);
        assert_eq!(best.username, "bob");
        assert_eq!(best.date, "2024-03-06");
    }

    #[test]
    fn test_best_average_place() {
        let table = make_table(&placed());
        let best = get_best_average_place(&table).unwrap();
        assert_eq!(best.average_place, 1.0);
        assert_eq!(best.username, "carol");
    }

    #[test]
    fn test_best_average_place_first_wins_ties() {
        let table = make_table(
            &place_all(&[
                TimeEntry::new("zed", "2024-03-04", 10.0),
                TimeEntry::new("amy", "2024-03-04", 10.0),
            ])
            .unwrap(),
        );
        assert_eq!(get_best_average_place(&table).unwrap().username, "zed");
    }

    #[test]
    fn test_highest_power_index_is_first_row() {
        let table = make_table(&placed());
        let top = get_highest_power_index(&table).unwrap();
        assert_eq!(top.power.index, 1);
    }

    #[test]
    fn test_average_time() {
        assert_eq!(get_average_time(&placed()), Some(37.0));
        assert_eq!(get_average_time(&[]), None);
    }

    #[test]
    fn test_empty_inputs_have_no_answer() {
        assert!(get_best_time(&[]).is_none());
        assert!(get_best_average_place(&[]).is_none());
        assert!(get_highest_power_index(&[]).is_none());
    }
}
