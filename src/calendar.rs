//! Week and month classification of trip dates.
//!
//! All classifiers take "today" explicitly; [`Clock`] supplies it at the edges.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Source of the current local date.
pub trait Clock {
    /// Current calendar date in local time.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parses a stored `YYYY-MM-DD` trip date.
pub fn parse_trip_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Monday and Sunday of the week containing `today`, both inclusive.
pub fn week_bounds(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    // Monday is day 1, Sunday day 7.
    let day = today.weekday().number_from_monday();
    let monday = today.checked_sub_days(Days::new(u64::from(day - 1)))?;
    let sunday = monday.checked_add_days(Days::new(6))?;
    Some((monday, sunday))
}

/// True when `date` lies in the Monday to Sunday week containing `today`.
///
/// Malformed dates are never in range.
pub fn is_this_week(date: &str, today: NaiveDate) -> bool {
    let Some(date) = parse_trip_date(date) else {
        return false;
    };
    week_bounds(today).is_some_and(|(monday, sunday)| monday <= date && date <= sunday)
}

/// True when `date` shares year and month with `today`.
pub fn is_this_month(date: &str, today: NaiveDate) -> bool {
    parse_trip_date(date).is_some_and(|d| d.year() == today.year() && d.month() == today.month())
}

/// Short `vi-VN` label used in the trip table, e.g. `T2, 10/06`.
///
/// Unparseable input is returned as-is.
pub fn short_date_label(date: &str) -> String {
    let Some(d) = parse_trip_date(date) else {
        return date.to_string();
    };
    let weekday = match d.weekday() {
        Weekday::Mon => "T2",
        Weekday::Tue => "T3",
        Weekday::Wed => "T4",
        Weekday::Thu => "T5",
        Weekday::Fri => "T6",
        Weekday::Sat => "T7",
        Weekday::Sun => "CN",
    };
    format!("{weekday}, {:02}/{:02}", d.day(), d.month())
}

/// Day-first rendering of a stored date, e.g. `10/06/2024`.
pub fn day_first(date: &str) -> String {
    date.split('-').rev().collect::<Vec<_>>().join("/")
}
