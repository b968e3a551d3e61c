use crate::dataset::Trip;

use super::types::StationReport;
use super::utility::mode;

/// Most popular start station, end station, and start/end pairing.
/// `None` when the dataset is empty.
pub fn station_stats(trips: &[Trip]) -> Option<StationReport> {
    let common_start_station = mode(trips.iter().map(|t| t.start_station.clone()))?;
    let common_end_station = mode(trips.iter().map(|t| t.end_station.clone()))?;

    // The pairing key is built for every row before taking the mode.
    let common_trip = mode(
        trips
            .iter()
            .map(|t| format!("{} - {}", t.start_station, t.end_station)),
    )?;

    Some(StationReport {
        common_start_station,
        common_end_station,
        common_trip,
    })
}
