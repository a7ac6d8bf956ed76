//! Company vehicle trip registration with write-through key-value persistence.
//!
//! # Examples
//!
//! Registering and approving trips with an in-memory backend:
//! ```
//! use chrono::NaiveDate;
//! use triplog::{
//!     config::TripLogConfig,
//!     core::store::{Registration, TripStore},
//!     persist::memory::MemoryKv,
//!     trip::TripDraft,
//!     types::{CarType, DateRange, TripStatus},
//! };
//!
//! let mut store = TripStore::open(MemoryKv::new(), &TripLogConfig::default());
//! let draft = TripDraft {
//!     name: "Nguyễn Văn A".to_string(),
//!     date: "2024-06-10".to_string(),
//!     time: "08:00".to_string(),
//!     car_type: CarType::Seat4,
//!     destination: "Hải Phòng".to_string(),
//!     purpose: "Họp khách hàng".to_string(),
//! };
//!
//! let trip = store.add_trip(draft.clone());
//! assert_eq!(trip.status, TripStatus::Pending);
//! store.update_status(trip.id, TripStatus::Approved).expect("update");
//!
//! // Same slot again: the user is asked and declines.
//! let outcome = store
//!     .register(draft, &mut |_: &str| false)
//!     .expect("valid draft");
//! assert!(matches!(outcome, Registration::Declined(_)));
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 12).expect("date");
//! assert_eq!(store.project(DateRange::Week, today).len(), 1);
//! ```
//!
//! Durable storage with SQLite:
//! ```no_run
//! use triplog::{
//!     config::TripLogConfig,
//!     core::store::TripStore,
//!     persist::sqlite::SqliteKv,
//! };
//!
//! let kv = SqliteKv::open("trips.db").expect("open sqlite");
//! let store = TripStore::open(kv, &TripLogConfig::default());
//! println!("{} trips", store.len());
//! ```
#![deny(missing_docs)]

/// Week and month classification of trip dates.
pub mod calendar;
/// Storage and export settings.
pub mod config;
/// Trip store and conflict detection.
pub mod core;
/// Spreadsheet export adapter.
pub mod export;
/// Key-value persistence abstraction and backends.
pub mod persist;
/// Confirmation seam for the dialog layer.
pub mod prompt;
/// Trip domain records and drafts.
pub mod trip;
/// Shared primitive types and enums.
pub mod types;
/// Sorted, filtered and aggregated views.
pub mod view;
