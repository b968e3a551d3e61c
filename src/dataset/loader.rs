//! Time-indexed dataset loading and two-dimensional filtering.

use anyhow::{Context, Result};
use tracing::info;

use crate::filters::Filters;

use super::source::TripSource;
use super::types::Trip;

/// Loads the trips for the selected city and applies the month and day
/// filters.
///
/// # Errors
///
/// Fails when the city is not registered, the export cannot be read, or
/// any row carries an unparseable start time. There is no partial load.
pub fn load(source: &dyn TripSource, filters: &Filters) -> Result<Vec<Trip>> {
    let raw = source.rows_for(&filters.city)?;
    let total = raw.len();

    let mut trips = Vec::with_capacity(total);
    for (index, row) in raw.into_iter().enumerate() {
        let trip = Trip::from_raw(row)
            .with_context(|| format!("row {} of {}", index + 1, filters.city))?;
        trips.push(trip);
    }

    let trips = apply_filters(trips, filters);
    info!(
        city = %filters.city,
        month = filters.month.name(),
        day = filters.day.name(),
        total,
        matched = trips.len(),
        "Dataset loaded"
    );
    Ok(trips)
}

/// Retains trips matching both selectors, preserving their order.
pub fn apply_filters(trips: Vec<Trip>, filters: &Filters) -> Vec<Trip> {
    trips
        .into_iter()
        .filter(|t| filters.month.matches(t.start_month) && filters.day.matches(t.start_weekday))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::types::RawTrip;
    use crate::filters::{DaySelector, Month, MonthSelector, Weekday};

    struct FixedSource(Vec<RawTrip>);

    impl TripSource for FixedSource {
        fn cities(&self) -> Vec<String> {
            vec!["chicago".to_string()]
        }

        fn rows_for(&self, city: &str) -> Result<Vec<RawTrip>> {
            if city == "chicago" {
                Ok(self.0.clone())
            } else {
                anyhow::bail!("no dataset registered for city {:?}", city)
            }
        }
    }

    fn raw(start_time: &str, start_station: &str) -> RawTrip {
        RawTrip {
            start_time: start_time.to_string(),
            end_time: start_time.to_string(),
            start_station: start_station.to_string(),
            end_station: "Canal St & Adams St".to_string(),
            duration_seconds: 300.0,
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    // 2017-06-05 was a Monday, 2017-06-06 a Tuesday, 2017-05-20 a Saturday.
    fn source() -> FixedSource {
        FixedSource(vec![
            raw("2017-06-05 08:10:00", "a"),
            raw("2017-06-06 09:00:00", "b"),
            raw("2017-05-20 10:30:00", "c"),
            raw("2017-06-05 17:45:00", "d"),
        ])
    }

    fn filters(month: MonthSelector, day: DaySelector) -> Filters {
        Filters {
            city: "chicago".to_string(),
            month,
            day,
        }
    }

    #[test]
    fn test_load_all_preserves_every_row_in_order() {
        let trips = load(
            &source(),
            &filters(MonthSelector::All, DaySelector::All),
        )
        .unwrap();

        let stations: Vec<&str> = trips.iter().map(|t| t.start_station.as_str()).collect();
        assert_eq!(stations, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_load_filters_by_month() {
        let trips = load(
            &source(),
            &filters(MonthSelector::Only(Month::June), DaySelector::All),
        )
        .unwrap();

        assert_eq!(trips.len(), 3);
        assert!(trips.iter().all(|t| t.start_month == 6));
    }

    #[test]
    fn test_load_filters_by_day() {
        let trips = load(
            &source(),
            &filters(MonthSelector::All, DaySelector::Only(Weekday::Monday)),
        )
        .unwrap();

        let stations: Vec<&str> = trips.iter().map(|t| t.start_station.as_str()).collect();
        assert_eq!(stations, vec!["a", "d"]);
        assert!(trips.iter().all(|t| t.start_weekday == 0));
    }

    #[test]
    fn test_load_filters_both_dimensions() {
        let trips = load(
            &source(),
            &filters(
                MonthSelector::Only(Month::June),
                DaySelector::Only(Weekday::Tuesday),
            ),
        )
        .unwrap();

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].start_station, "b");
    }

    #[test]
    fn test_apply_filters_is_idempotent() {
        let f = filters(MonthSelector::Only(Month::June), DaySelector::All);
        let once = load(&source(), &f).unwrap();
        let twice = apply_filters(once.clone(), &f);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_load_unknown_city_is_fatal() {
        let f = Filters {
            city: "atlantis".to_string(),
            month: MonthSelector::All,
            day: DaySelector::All,
        };
        assert!(load(&source(), &f).is_err());
    }

    #[test]
    fn test_load_unparseable_start_time_is_fatal() {
        let source = FixedSource(vec![raw("not a timestamp", "a")]);
        let f = filters(MonthSelector::All, DaySelector::All);
        assert!(load(&source, &f).is_err());
    }
}
