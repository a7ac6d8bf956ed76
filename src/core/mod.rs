//! In-memory trip store and conflict detection.

/// Same-slot conflict rule and warning text.
pub mod conflict;
/// Helper index aliases.
pub mod indices;
/// Trip store with write-through persistence.
pub mod store;
