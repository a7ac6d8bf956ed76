//! Trip domain record, draft, and draft validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    core::conflict::SlotKey,
    types::{CarType, TripId, TripStatus},
};

/// Persisted trip request.
///
/// Field names serialize in camelCase so blobs written by earlier versions of the
/// tool load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// Stable trip identifier.
    pub id: TripId,
    /// Requester name.
    pub name: String,
    /// Departure date, `YYYY-MM-DD`.
    pub date: String,
    /// Departure time, `HH:MM`.
    pub time: String,
    /// Requested car class.
    pub car_type: CarType,
    /// Free-text destination.
    pub destination: String,
    /// Free-text trip purpose.
    pub purpose: String,
    /// Approval state.
    pub status: TripStatus,
}

impl TripRecord {
    /// Materializes a draft with the given id and a pending status.
    pub fn from_draft(id: TripId, draft: TripDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            time: draft.time,
            car_type: draft.car_type,
            destination: draft.destination,
            purpose: draft.purpose,
            status: TripStatus::Pending,
        }
    }

    /// Scheduling slot this trip claims.
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(&self.date, &self.time, self.car_type)
    }
}

/// Registration form payload used to create a new [`TripRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    /// Requester name.
    pub name: String,
    /// Departure date, `YYYY-MM-DD`.
    pub date: String,
    /// Departure time, `HH:MM`.
    pub time: String,
    /// Requested car class.
    pub car_type: CarType,
    /// Free-text destination.
    pub destination: String,
    /// Free-text trip purpose.
    pub purpose: String,
}

/// First form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// A required text field is empty or whitespace.
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    /// `date` is not `YYYY-MM-DD`.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// `time` is not `HH:MM`.
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
}

impl TripDraft {
    /// Scheduling slot this draft would claim.
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(&self.date, &self.time, self.car_type)
    }

    /// Checks the fields the registration form marks as required.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("name", &self.name),
            ("date", &self.date),
            ("time", &self.time),
            ("destination", &self.destination),
            ("purpose", &self.purpose),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }

        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.date.clone()))?;
        NaiveTime::parse_from_str(&self.time, "%H:%M")
            .map_err(|_| DraftError::InvalidTime(self.time.clone()))?;
        Ok(())
    }
}
