use chrono::NaiveDate;
use serde::Serialize;

use crate::{calendar, trip::TripRecord, types::TripStatus};

/// Aggregate counts over a trip collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TripStats {
    /// All trips.
    pub total: usize,
    /// Trips dated in the current calendar month.
    pub this_month: usize,
    /// Trips dated in the current Monday to Sunday week.
    pub this_week: usize,
    /// Approved trips.
    pub approved: usize,
    /// Trips awaiting approval.
    pub pending: usize,
    /// Rejected trips.
    pub rejected: usize,
}

impl TripStats {
    /// Counts `trips` relative to `today`.
    pub fn collect<'a, I>(trips: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a TripRecord>,
    {
        let mut stats = Self::default();
        for trip in trips {
            stats.total += 1;
            if calendar::is_this_month(&trip.date, today) {
                stats.this_month += 1;
            }
            if calendar::is_this_week(&trip.date, today) {
                stats.this_week += 1;
            }
            match trip.status {
                TripStatus::Approved => stats.approved += 1,
                TripStatus::Pending => stats.pending += 1,
                TripStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    /// Per-status counts in chart order.
    pub fn status_breakdown(&self) -> [(TripStatus, usize); 3] {
        [
            (TripStatus::Approved, self.approved),
            (TripStatus::Pending, self.pending),
            (TripStatus::Rejected, self.rejected),
        ]
    }
}
