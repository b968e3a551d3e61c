//! Rendering of analyzer reports and raw-row pages to the message sink.
//!
//! Computation lives in [`crate::analyzers`]; this module wraps each
//! report in its banner, findings, elapsed-seconds line, and separator
//! rule, keeping the analyzers free of I/O.

use std::time::Instant;

use crate::analyzers::{duration, station, temporal, user};
use crate::console::MessageSink;
use crate::dataset::Trip;
use crate::dataset::types::TIME_FORMAT;

const RULE_WIDTH: usize = 40;

pub fn rule(sink: &dyn MessageSink) {
    sink.info(&"-".repeat(RULE_WIDTH));
}

pub(crate) fn report_elapsed(sink: &dyn MessageSink, started: Instant) {
    sink.info(&format!(
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    ));
    rule(sink);
}

/// Reports the most frequent travel times.
pub fn report_time_stats(sink: &dyn MessageSink, trips: &[Trip]) {
    let started = Instant::now();
    let Some(report) = temporal::time_stats(trips) else {
        sink.info("\nSorry there is no time data to report on.\n");
        return;
    };

    sink.info("\nCalculating The Most Frequent Times of Travel...\n");
    sink.info(&format!(
        "The most common month is: {}",
        report.common_month.name()
    ));
    sink.info(&format!(
        "The most common day is: {}",
        report.common_day.name()
    ));
    sink.info(&format!("The most common hour is: {}", report.common_hour));
    report_elapsed(sink, started);
}

/// Reports the most popular stations and trip.
pub fn report_station_stats(sink: &dyn MessageSink, trips: &[Trip]) {
    let started = Instant::now();
    let Some(report) = station::station_stats(trips) else {
        sink.info("\nSorry there is no station data to report on.\n");
        return;
    };

    sink.info("\nCalculating The Most Popular Stations and Trip...\n");
    sink.info(&format!(
        "The most common start station is: {}",
        report.common_start_station
    ));
    sink.info(&format!(
        "The most common end station is: {}",
        report.common_end_station
    ));
    sink.info(&format!(
        "The most common start and end station combo is: {}",
        report.common_trip
    ));
    report_elapsed(sink, started);
}

/// Reports the total and most frequent trip duration.
pub fn report_duration_stats(sink: &dyn MessageSink, trips: &[Trip]) {
    let started = Instant::now();
    let Some(report) = duration::duration_stats(trips) else {
        sink.info("\nSorry there is no trip data to report on.\n");
        return;
    };

    sink.info("\nCalculating Trip Duration...\n");
    sink.info(&format!(
        "The total trip duration is {} seconds",
        report.total_seconds
    ));
    // The label says mean; the value is the most frequent duration.
    sink.info(&format!(
        "The mean trip duration is {} seconds",
        report.common_seconds
    ));
    report_elapsed(sink, started);
}

/// Reports rider demographics.
pub fn report_user_stats(sink: &dyn MessageSink, trips: &[Trip]) {
    let started = Instant::now();
    let Some(report) = user::user_stats(trips) else {
        sink.info("\nSorry there is no user data to report on.\n");
        return;
    };

    sink.info("\nCalculating User Stats...\n");

    sink.info("\nThe following table shows the count of different user types:\n");
    render_counts(sink, &report.user_type_counts);

    match &report.gender_counts {
        Some(counts) => {
            sink.info("\nThe following table shows the count of different genders:\n");
            render_counts(sink, counts);
        }
        None => sink.info("\nThis data contains no gender data\n"),
    }

    match &report.birth_years {
        Some(years) => {
            sink.info(&format!(
                "\nThe earliest year of birth is : {}",
                years.earliest
            ));
            sink.info(&format!(
                "\nThe most recent year of birth is : {}",
                years.latest
            ));
            sink.info(&format!(
                "\nThe most common year of birth is : {}",
                years.common
            ));
        }
        None => sink.info("\nThis data does not contain birth years.\n"),
    }

    report_elapsed(sink, started);
}

fn render_counts(sink: &dyn MessageSink, counts: &[(String, usize)]) {
    for (value, count) in counts {
        sink.info(&format!("{:<20} {:>8}", value, count));
    }
}

/// Renders rows `[start, end)` of the dataset as a fixed-width table,
/// clamped to the dataset length, followed by a count line. Headers are
/// suppressed on continuation pages.
pub fn render_page(
    sink: &dyn MessageSink,
    trips: &[Trip],
    start: usize,
    end: usize,
    with_header: bool,
) {
    let len = trips.len();
    let from = start.min(len);
    let to = end.min(len);

    if with_header {
        sink.info(&format!(
            "{:<20} {:<20} {:<35} {:<35} {:>8} {:<12} {:<8} {:>10}",
            "Start Time",
            "End Time",
            "Start Station",
            "End Station",
            "Duration",
            "User Type",
            "Gender",
            "Birth Year"
        ));
    }

    for trip in &trips[from..to] {
        let start_time = trip.start_time.format(TIME_FORMAT).to_string();
        let end_time = trip.end_time.format(TIME_FORMAT).to_string();
        let gender = trip.gender.as_deref().unwrap_or("");
        let birth_year = trip
            .birth_year
            .map(|y| y.to_string())
            .unwrap_or_default();

        sink.info(&format!(
            "{:<20} {:<20} {:<35} {:<35} {:>8} {:<12} {:<8} {:>10}",
            start_time,
            end_time,
            trip.start_station,
            trip.end_station,
            trip.duration_seconds,
            trip.user_type,
            gender,
            birth_year
        ));
    }

    sink.info(&format!("Displayed rows {} to {} of {} rows", from, to, len));
}
