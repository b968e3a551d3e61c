//! Trip record types.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

/// Timestamp layout used by the city CSV exports.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row as it appears in a city CSV export.
///
/// Gender and birth year are absent in some cities; the `Option` fields
/// absorb both a missing column and an empty cell. Birth years come out
/// of the exports with a fractional part.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub duration_seconds: f64,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A parsed trip, with the derived time features used for filtering and
/// the temporal statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_seconds: i64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// 1 (january) through 12 (december).
    pub start_month: u32,
    /// 0 (monday) through 6 (sunday).
    pub start_weekday: u32,
    /// 0 through 23.
    pub start_hour: u32,
}

impl Trip {
    /// Parses a raw CSV row into a [`Trip`].
    ///
    /// # Errors
    ///
    /// Returns an error if the start time does not match [`TIME_FORMAT`].
    pub fn from_raw(raw: RawTrip) -> Result<Trip> {
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, TIME_FORMAT)
            .with_context(|| format!("unparseable start time {:?}", raw.start_time))?;

        // The end column is carried through unparsed; end_time tracks
        // start_time.
        let end_time = start_time;

        Ok(Trip {
            start_time,
            end_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_seconds: raw.duration_seconds as i64,
            user_type: raw.user_type,
            gender: raw.gender.filter(|g| !g.is_empty()),
            birth_year: raw.birth_year.map(|year| year as i32),
            start_month: start_time.month(),
            start_weekday: start_time.weekday().num_days_from_monday(),
            start_hour: start_time.hour(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start_time: &str) -> RawTrip {
        RawTrip {
            start_time: start_time.to_string(),
            end_time: "2017-06-05 08:15:00".to_string(),
            start_station: "Clinton St & Washington Blvd".to_string(),
            end_station: "Canal St & Adams St".to_string(),
            duration_seconds: 321.0,
            user_type: "Subscriber".to_string(),
            gender: Some("Male".to_string()),
            birth_year: Some(1992.0),
        }
    }

    #[test]
    fn test_from_raw_derives_time_features() {
        // 2017-06-05 was a Monday.
        let trip = Trip::from_raw(raw("2017-06-05 08:10:00")).unwrap();

        assert_eq!(trip.start_month, 6);
        assert_eq!(trip.start_weekday, 0);
        assert_eq!(trip.start_hour, 8);
        assert_eq!(trip.duration_seconds, 321);
        assert_eq!(trip.birth_year, Some(1992));
    }

    #[test]
    fn test_from_raw_end_time_tracks_start_time() {
        let trip = Trip::from_raw(raw("2017-06-05 08:10:00")).unwrap();
        assert_eq!(trip.end_time, trip.start_time);
    }

    #[test]
    fn test_from_raw_rejects_malformed_start_time() {
        assert!(Trip::from_raw(raw("05/06/2017 08:10")).is_err());
        assert!(Trip::from_raw(raw("")).is_err());
    }

    #[test]
    fn test_from_raw_drops_empty_gender() {
        let mut row = raw("2017-06-05 08:10:00");
        row.gender = Some(String::new());
        let trip = Trip::from_raw(row).unwrap();
        assert_eq!(trip.gender, None);
    }

    #[test]
    fn test_from_raw_truncates_fractional_birth_year() {
        let mut row = raw("2017-06-05 08:10:00");
        row.birth_year = Some(1989.7);
        let trip = Trip::from_raw(row).unwrap();
        assert_eq!(trip.birth_year, Some(1989));
    }
}
