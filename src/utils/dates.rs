//! Date key helpers.
//!
//! Date keys arrive from upstream as `YYYY-MM-DD`, sometimes with a trailing
//! time component. Only the calendar day is meaningful here.

use chrono::{Datelike, NaiveDate};

use crate::models::{LeaderboardError, Result};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%m/%d/%Y";

/// Parse a date key into a comparable calendar day.
pub fn format_db_date(date_key: &str) -> Result<NaiveDate> {
    let invalid = || LeaderboardError::InvalidDate(date_key.to_string());
    let key = date_key.trim();
    // only a time part may follow the calendar day
    let day = match key.get(10..11) {
        None => key,
        Some("T") | Some(" ") => &key[..10],
        Some(_) => return Err(invalid()),
    };
    NaiveDate::parse_from_str(day, DATE_KEY_FORMAT).map_err(|_| invalid())
}

/// Render a date key for chart labels.
pub fn format_date(date_key: &str) -> Result<String> {
    Ok(format_db_date(date_key)?.format(DISPLAY_FORMAT).to_string())
}

/// Weekday counted from Sunday = 0 through Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
