use crate::dataset::Trip;
use crate::filters::{Month, Weekday};

use super::types::TimeReport;
use super::utility::mode;

/// Most frequent month, weekday, and start hour. `None` when the
/// dataset is empty.
pub fn time_stats(trips: &[Trip]) -> Option<TimeReport> {
    let common_month = Month::from_number(mode(trips.iter().map(|t| t.start_month))?)?;
    let common_day = Weekday::from_number(mode(trips.iter().map(|t| t.start_weekday))?)?;
    let common_hour = mode(trips.iter().map(|t| t.start_hour))?;

    Some(TimeReport {
        common_month,
        common_day,
        common_hour,
    })
}
