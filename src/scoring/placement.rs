use crate::{
    models::{LeaderboardError, PlacedEntry, Result, TimeEntry},
    utils::format_db_date,
};

/// Inputs to a single entry's day score.
#[derive(Debug, Clone, Copy)]
pub struct DayScoreParams {
    pub fastest_time: f64,
    pub slowest_time: f64,
    pub participant_count: usize,
    pub time: f64,
    pub place: u32,
}

/// Blend of placement and margin behind the leader, each in [0, 1].
///
/// A lone participant, or a day where everyone ties, scores 1.
pub fn day_score(params: &DayScoreParams) -> f64 {
    if params.participant_count == 1 || params.fastest_time == params.slowest_time {
        return 1.0;
    }

    let count = params.participant_count as f64;
    let place_score = (count - params.place as f64) / count;
    let time_score =
        (params.slowest_time - params.time) / (params.slowest_time - params.fastest_time);

    (place_score + time_score) / 2.0
}

/// Rank one date's entries. `ordered_entries` must be sorted by ascending
/// time; equal times share a place and the next distinct time takes the
/// following place.
pub fn place_entries(ordered_entries: &[TimeEntry]) -> Result<Vec<PlacedEntry>> {
    let (first, last) = match (ordered_entries.first(), ordered_entries.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(LeaderboardError::EmptyGroup),
    };

    let fastest_time = first.time;
    let slowest_time = last.time;
    let participant_count = ordered_entries.len();

    let mut placed = Vec::with_capacity(participant_count);
    let mut last_time: Option<f64> = None;
    let mut place = 0u32;

    for entry in ordered_entries {
        entry.validate()?;
        if last_time != Some(entry.time) {
            place += 1;
        }
        last_time = Some(entry.time);

        placed.push(PlacedEntry {
            username: entry.username.clone(),
            date: entry.date.clone(),
            time: entry.time,
            place,
            moment: format_db_date(&entry.date)?,
            day_score: day_score(&DayScoreParams {
                fastest_time,
                slowest_time,
                participant_count,
                time: entry.time,
                place,
            }),
        });
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(times: &[f64]) -> Vec<TimeEntry> {
        times
            .iter()
            .enumerate()
            .map(|(i, t)| TimeEntry::new(format!("user{}", i), "2024-03-04", *t))
            .collect()
    }

    #[test]
    fn test_single_participant_scores_one() {
        let placed = place_entries(&day(&[42.0])).unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].place, 1);
        assert_eq!(placed[0].day_score, 1.0);
    }

    #[test]
    fn test_everyone_tied_scores_one() {
        let placed = place_entries(&day(&[30.0, 30.0, 30.0])).unwrap();
        assert!(placed.iter().all(|p| p.place == 1));
        assert!(placed.iter().all(|p| p.day_score == 1.0));
    }

    #[test]
    fn test_two_entries_blend_place_and_margin() {
        let placed = place_entries(&day(&[10.0, 20.0])).unwrap();
        let places: Vec<u32> = placed.iter().map(|p| p.place).collect();
        assert_eq!(places, vec![1, 2]);
        // place score 0.5, time score 1.0
        assert!((placed[0].day_score - 0.75).abs() < 1e-12);
        // place score 0.0, time score 0.0
        assert_eq!(placed[1].day_score, 0.0);
    }

    #[test]
    fn test_ties_share_place_without_gaps() {
        let placed = place_entries(&day(&[10.0, 10.0, 15.0, 20.0, 20.0, 30.0])).unwrap();
        let places: Vec<u32> = placed.iter().map(|p| p.place).collect();
        assert_eq!(places, vec![1, 1, 2, 3, 3, 4]);
        assert!(places.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_time_still_places_first() {
        let placed = place_entries(&day(&[0.0, 5.0])).unwrap();
        assert_eq!(placed[0].place, 1);
        assert_eq!(placed[1].place, 2);
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let placed = place_entries(&day(&[12.0, 19.0, 19.0, 40.0, 95.0])).unwrap();
        for entry in &placed {
            assert!((0.0..=1.0).contains(&entry.day_score), "{}", entry.day_score);
        }
        // third place of five, (95 - 40) / (95 - 12) behind
        let expected = ((5.0 - 3.0) / 5.0 + 55.0 / 83.0) / 2.0;
        assert!((placed[3].day_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_moment_is_parsed_from_date() {
        let placed = place_entries(&day(&[10.0])).unwrap();
        assert_eq!(placed[0].moment.to_string(), "2024-03-04");
    }

    #[test]
    fn test_empty_group_fails_fast() {
        let err = place_entries(&[]).unwrap_err();
        assert!(matches!(err, LeaderboardError::EmptyGroup));
        assert_eq!(err.to_string(), "Cannot place an empty group of entries");
    }

    #[test]
    fn test_negative_time_rejected() {
        assert!(matches!(
            place_entries(&day(&[-1.0, 3.0])),
            Err(LeaderboardError::InvalidTime { .. })
        ));
    }
}
