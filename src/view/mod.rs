//! Read-only projections of the trip collection.

/// Sorted and date-filtered table rows.
pub mod projector;
/// Counts for the statistics cards.
pub mod stats;
