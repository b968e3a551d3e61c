use crate::dataset::Trip;

use super::types::DurationReport;
use super::utility::mode;

/// Total travel time and the most frequent trip duration. `None` when
/// the dataset is empty.
pub fn duration_stats(trips: &[Trip]) -> Option<DurationReport> {
    let total_seconds = trips.iter().map(|t| t.duration_seconds).sum();
    let common_seconds = mode(trips.iter().map(|t| t.duration_seconds))?;

    Some(DurationReport {
        total_seconds,
        common_seconds,
    })
}
