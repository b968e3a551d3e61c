//! Report types produced by the analyzers.

use crate::filters::{Month, Weekday};

/// Most frequent travel times in the filtered dataset.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeReport {
    pub common_month: Month,
    pub common_day: Weekday,
    pub common_hour: u32,
}

/// Most popular stations and start/end pairing.
#[derive(Debug, PartialEq, Eq)]
pub struct StationReport {
    pub common_start_station: String,
    pub common_end_station: String,
    pub common_trip: String,
}

/// Total and most frequent trip duration, in seconds.
#[derive(Debug, PartialEq, Eq)]
pub struct DurationReport {
    pub total_seconds: i64,
    pub common_seconds: i64,
}

/// Birth-year spread, for cities whose exports carry rider birth years.
#[derive(Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub common: i32,
}

/// Rider demographics: user types always, gender and birth year only
/// when the city exports them.
#[derive(Debug, PartialEq, Eq)]
pub struct UserReport {
    pub user_type_counts: Vec<(String, usize)>,
    pub gender_counts: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}
