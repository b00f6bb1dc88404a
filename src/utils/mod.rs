pub mod dates;
pub mod group;
pub mod math;

pub use dates::{format_date, format_db_date, weekday_index};
pub use group::group_by;
pub use math::{mean, median, round_to};
