use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::{trip::TripRecord, types::DateRange};

/// Orders trips by departure, `(date, time)` ascending.
///
/// Both fields are zero-padded ISO text, so byte order is chronological order.
pub fn by_departure(a: &TripRecord, b: &TripRecord) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.time.cmp(&b.time))
}

/// Returns a departure-sorted copy of `trips` restricted to `range`.
///
/// The sort is stable, so trips sharing a departure keep their input order.
pub fn project<'a, I>(trips: I, range: DateRange, today: NaiveDate) -> Vec<TripRecord>
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    let mut rows: Vec<TripRecord> = trips.into_iter().cloned().collect();
    rows.sort_by(by_departure);
    if range != DateRange::All {
        rows.retain(|t| range.contains(&t.date, today));
    }
    rows
}
