//! Calendar enumerations and the per-session filter set.
//!
//! [`Month`] and [`Weekday`] are closed enumerations carrying both their
//! canonical lowercase name and numeric code, so no string-keyed lookup
//! tables leak into the rest of the pipeline.

use anyhow::{Context, Result};

use crate::console::MessageSink;
use crate::prompt::Prompter;

/// Calendar months, numbered 1 (january) through 12 (december).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Days of the week, numbered 0 (monday) through 6 (sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(number: u32) -> Option<Weekday> {
        Weekday::ALL.get(number as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<Weekday> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

/// Month filter: a specific month, or every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    All,
    Only(Month),
}

impl MonthSelector {
    /// Numeric code echoed back to the user; `all` is the -1 sentinel.
    pub fn code(self) -> i32 {
        match self {
            MonthSelector::All => -1,
            MonthSelector::Only(m) => m.number() as i32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MonthSelector::All => "all",
            MonthSelector::Only(m) => m.name(),
        }
    }

    pub fn parse(name: &str) -> Option<MonthSelector> {
        if name.eq_ignore_ascii_case("all") {
            return Some(MonthSelector::All);
        }
        Month::from_name(name).map(MonthSelector::Only)
    }

    /// True when a trip starting in `month` (1-12) passes this filter.
    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthSelector::All => true,
            MonthSelector::Only(m) => m.number() == month,
        }
    }
}

/// Weekday filter: a specific day, or every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    All,
    Only(Weekday),
}

impl DaySelector {
    pub fn code(self) -> i32 {
        match self {
            DaySelector::All => -1,
            DaySelector::Only(d) => d.number() as i32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DaySelector::All => "all",
            DaySelector::Only(d) => d.name(),
        }
    }

    pub fn parse(name: &str) -> Option<DaySelector> {
        if name.eq_ignore_ascii_case("all") {
            return Some(DaySelector::All);
        }
        Weekday::from_name(name).map(DaySelector::Only)
    }

    /// True when a trip starting on `weekday` (0=monday) passes this filter.
    pub fn matches(self, weekday: u32) -> bool {
        match self {
            DaySelector::All => true,
            DaySelector::Only(d) => d.number() == weekday,
        }
    }
}

/// The three user selections driving one session iteration.
#[derive(Debug, Clone)]
pub struct Filters {
    pub city: String,
    pub month: MonthSelector,
    pub day: DaySelector,
}

/// Month prompt options: the twelve month names plus `all`.
pub fn month_options() -> Vec<&'static str> {
    Month::ALL.iter().map(|m| m.name()).chain(["all"]).collect()
}

/// Day prompt options: the seven weekday names plus `all`.
pub fn day_options() -> Vec<&'static str> {
    Weekday::ALL
        .iter()
        .map(|d| d.name())
        .chain(["all"])
        .collect()
}

/// Asks for a city, month, and day, echoing the confirmed selection with
/// its numeric codes.
pub fn select_filters(
    prompter: &mut Prompter<'_>,
    sink: &dyn MessageSink,
    cities: &[String],
) -> Result<Filters> {
    sink.info("Hello! Let's explore some US bikeshare data!");

    let city = prompter.select("Which city do you want to analyse?", cities)?;

    let month = prompter.select("Which month do you want to analyse?", &month_options())?;
    let month = MonthSelector::parse(&month).context("month option did not parse")?;

    let day = prompter.select("Which day do you want to analyse?", &day_options())?;
    let day = DaySelector::parse(&day).context("day option did not parse")?;

    sink.info(&"-".repeat(40));
    sink.info(&format!(
        "Processing City={} Month={}({}) Day={}({})",
        city,
        month.name(),
        month.code(),
        day.name(),
        day.code()
    ));
    sink.info(&"-".repeat(40));

    Ok(Filters { city, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSink, ScriptedReader};

    #[test]
    fn test_month_numbers_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_weekday_numbers_start_at_monday() {
        assert_eq!(Weekday::Monday.number(), 0);
        assert_eq!(Weekday::Sunday.number(), 6);
        assert_eq!(Weekday::from_number(3), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_number(7), None);
    }

    #[test]
    fn test_name_parsing_is_case_insensitive() {
        assert_eq!(Month::from_name("JUNE"), Some(Month::June));
        assert_eq!(Weekday::from_name("Monday"), Some(Weekday::Monday));
        assert_eq!(Month::from_name("smarch"), None);
    }

    #[test]
    fn test_all_selector_uses_sentinel_code() {
        assert_eq!(MonthSelector::All.code(), -1);
        assert_eq!(DaySelector::All.code(), -1);
        assert_eq!(MonthSelector::Only(Month::June).code(), 6);
        assert_eq!(DaySelector::Only(Weekday::Monday).code(), 0);
    }

    #[test]
    fn test_all_selector_matches_everything() {
        for number in 1..=12 {
            assert!(MonthSelector::All.matches(number));
        }
        assert!(!MonthSelector::Only(Month::June).matches(5));
        assert!(DaySelector::All.matches(6));
        assert!(!DaySelector::Only(Weekday::Monday).matches(1));
    }

    #[test]
    fn test_select_filters_composes_the_three_answers() {
        let cities = vec!["chicago".to_string(), "washington".to_string()];
        let mut reader = ScriptedReader::new(["Chicago", "june", "ALL"]);
        let sink = RecordingSink::new();
        let mut prompter = Prompter::new(&mut reader, &sink, None);

        let filters = select_filters(&mut prompter, &sink, &cities).unwrap();

        assert_eq!(filters.city, "chicago");
        assert_eq!(filters.month, MonthSelector::Only(Month::June));
        assert_eq!(filters.day, DaySelector::All);
        assert!(
            sink.transcript()
                .contains("Processing City=chicago Month=june(6) Day=all(-1)")
        );
    }
}
