//! Same-slot conflict rule for trip registration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{calendar, trip::TripRecord, types::CarType};

/// `(date, time, car)` triple a trip occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    /// Departure date, `YYYY-MM-DD`.
    pub date: String,
    /// Departure time, `HH:MM`.
    pub time: String,
    /// Car class.
    pub car_type: CarType,
}

impl SlotKey {
    /// Builds a slot from borrowed parts.
    pub fn new(date: &str, time: &str, car_type: CarType) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            car_type,
        }
    }

    /// True when `trip` claims this slot, regardless of status.
    pub fn matches(&self, trip: &TripRecord) -> bool {
        trip.date == self.date && trip.time == self.time && trip.car_type == self.car_type
    }
}

/// First non-rejected trip in `existing` that occupies `candidate`.
pub fn find_conflict<'a, I>(candidate: &SlotKey, existing: I) -> Option<&'a TripRecord>
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    existing
        .into_iter()
        .find(|trip| trip.status.occupies_slot() && candidate.matches(trip))
}

/// True when a pending or approved trip already holds `candidate`.
pub fn has_conflict<'a, I>(candidate: &SlotKey, existing: I) -> bool
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    find_conflict(candidate, existing).is_some()
}

/// Advisory shown when a registration lands on an occupied slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictWarning {
    /// Contested slot.
    pub slot: SlotKey,
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⚠️ CẢNH BÁO TRÙNG LỊCH!\n\nĐã có người đăng ký {} vào lúc {} ngày {}.\n\nBạn có chắc chắn muốn tiếp tục đăng ký không?",
            self.slot.car_type,
            self.slot.time,
            calendar::day_first(&self.slot.date),
        )
    }
}
