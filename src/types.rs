//! Shared primitive IDs and trip-related enums.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;

/// Monotonic trip identifier.
pub type TripId = u64;

/// Vehicle capacity class used for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CarType {
    /// Four-seat sedan.
    #[default]
    #[serde(rename = "4 chỗ")]
    Seat4,
    /// Seven-seat SUV/MPV.
    #[serde(rename = "7 chỗ")]
    Seat7,
    /// Sixteen-seat van.
    #[serde(rename = "16 chỗ")]
    Seat16,
}

impl CarType {
    /// Every car class, in form order.
    pub const ALL: [CarType; 3] = [CarType::Seat4, CarType::Seat7, CarType::Seat16];

    /// Display label, also used as the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            CarType::Seat4 => "4 chỗ",
            CarType::Seat7 => "7 chỗ",
            CarType::Seat16 => "16 chỗ",
        }
    }

    /// Longer label shown in the registration form picker.
    pub fn option_label(self) -> &'static str {
        match self {
            CarType::Seat4 => "Xe 4 chỗ (Sedan)",
            CarType::Seat7 => "Xe 7 chỗ (SUV/MPV)",
            CarType::Seat16 => "Xe 16 chỗ (Van)",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not a known car class label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown car type: {0:?}")]
pub struct UnknownCarType(pub String);

impl FromStr for CarType {
    type Err = UnknownCarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarType::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| UnknownCarType(s.to_string()))
    }
}

/// Approval state of a trip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Waiting for an administrator.
    #[default]
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator; no longer occupies its slot.
    Rejected,
}

impl TripStatus {
    /// Localized status label.
    pub fn label(self) -> &'static str {
        match self {
            TripStatus::Pending => "Chờ duyệt",
            TripStatus::Approved => "Đã duyệt",
            TripStatus::Rejected => "Từ chối",
        }
    }

    /// True when a trip in this state blocks its `(date, time, car)` slot.
    pub fn occupies_slot(self) -> bool {
        self != TripStatus::Rejected
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Date window applied by the trip table filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// No filtering.
    #[default]
    All,
    /// Monday to Sunday of the current week.
    Week,
    /// Current calendar month.
    Month,
}

impl DateRange {
    /// Tab title.
    pub fn label(self) -> &'static str {
        match self {
            DateRange::All => "Tất cả",
            DateRange::Week => "Tuần này",
            DateRange::Month => "Tháng này",
        }
    }

    /// True when `date` falls in this window relative to `today`.
    pub fn contains(self, date: &str, today: NaiveDate) -> bool {
        match self {
            DateRange::All => true,
            DateRange::Week => calendar::is_this_week(date, today),
            DateRange::Month => calendar::is_this_month(date, today),
        }
    }
}

/// Returned when a string is not `all`, `week` or `month`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown date range: {0:?}")]
pub struct UnknownDateRange(pub String);

impl FromStr for DateRange {
    type Err = UnknownDateRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(DateRange::All),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            other => Err(UnknownDateRange(other.to_string())),
        }
    }
}
