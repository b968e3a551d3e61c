use crate::dataset::Trip;

use super::types::{BirthYearStats, UserReport};
use super::utility::{mode, value_counts};

/// Rider demographics. `None` when the dataset is empty; gender and
/// birth-year sections are `None` when the city's export lacks those
/// columns.
pub fn user_stats(trips: &[Trip]) -> Option<UserReport> {
    if trips.is_empty() {
        return None;
    }

    let user_type_counts = value_counts(trips.iter().map(|t| t.user_type.clone()));

    let genders: Vec<String> = trips.iter().filter_map(|t| t.gender.clone()).collect();
    let gender_counts = if genders.is_empty() {
        None
    } else {
        Some(value_counts(genders))
    };

    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();

    Some(UserReport {
        user_type_counts,
        gender_counts,
        birth_years: birth_year_stats(&years),
    })
}

fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;
    let common = mode(years.iter().copied())?;

    Some(BirthYearStats {
        earliest,
        latest,
        common,
    })
}
