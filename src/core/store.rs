use chrono::NaiveDate;
use hashbrown::{HashMap, HashSet};
use tracing::{debug, error, info, warn};

use crate::{
    config::TripLogConfig,
    core::{
        conflict::{ConflictWarning, SlotKey},
        indices::SlotIndex,
    },
    persist::{KvStore, TripRepository},
    prompt::{Confirm, DELETE_PROMPT},
    trip::{DraftError, TripDraft, TripRecord},
    types::{DateRange, TripId, TripStatus},
    view::{projector, stats::TripStats},
};

/// Store-level failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No trip carries the given id.
    #[error("no trip with id {0}")]
    MissingTrip(TripId),
}

/// Result of [`TripStore::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The trip was stored.
    Added(TripRecord),
    /// The slot was taken and the user chose not to proceed.
    Declined(ConflictWarning),
}

/// Authoritative trip collection. Every mutation writes the whole collection through
/// the repository before returning.
#[derive(Debug)]
pub struct TripStore<S: KvStore> {
    repo: TripRepository<S>,
    records: HashMap<TripId, TripRecord>,
    order: Vec<TripId>,
    by_slot: SlotIndex,
    // `None` once the counter has passed `TripId::MAX`.
    next_trip_id: Option<TripId>,
}

impl<S: KvStore> TripStore<S> {
    /// Loads the persisted collection from `backend`. Unreadable data yields an
    /// empty store.
    pub fn open(backend: S, config: &TripLogConfig) -> Self {
        let repo = TripRepository::new(backend, config.storage_key.clone());
        let mut store = Self {
            repo,
            records: HashMap::new(),
            order: Vec::new(),
            by_slot: SlotIndex::default(),
            next_trip_id: Some(1),
        };
        store.reload();
        store
    }

    /// Replaces the in-memory collection with what the backend holds.
    pub fn reload(&mut self) {
        let trips = self.repo.load_all();
        self.records.clear();
        self.order.clear();
        self.by_slot.clear();
        self.next_trip_id = trips
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        let mut taken = HashSet::with_capacity(trips.len());
        let duplicates: Vec<usize> = trips
            .iter()
            .enumerate()
            .filter(|(_, t)| !taken.insert(t.id))
            .map(|(pos, _)| pos)
            .collect();

        let mut trips = trips;
        for &pos in &duplicates {
            let fresh = allocate_id(&mut self.next_trip_id, |id| taken.contains(&id));
            taken.insert(fresh);
            warn!(old_id = trips[pos].id, new_id = fresh, "duplicate trip id in stored data, reassigned");
            trips[pos].id = fresh;
        }
        let reassigned = duplicates.len();

        for trip in trips {
            self.insert_record(trip);
        }

        if reassigned > 0 {
            self.persist();
        }
        info!(count = self.order.len(), key = %self.repo.key(), "trips loaded");
    }

    /// Stores a new pending trip and returns it.
    pub fn add_trip(&mut self, draft: TripDraft) -> TripRecord {
        let id = self.take_next_trip_id();
        let trip = TripRecord::from_draft(id, draft);
        self.insert_record(trip.clone());
        self.persist();
        debug!(id, date = %trip.date, time = %trip.time, car = %trip.car_type, "trip added");
        trip
    }

    /// Full registration flow: validates `draft`, asks `confirm` when the slot is
    /// already taken, then stores the trip unless the user declines.
    pub fn register<C: Confirm + ?Sized>(
        &mut self,
        draft: TripDraft,
        confirm: &mut C,
    ) -> Result<Registration, DraftError> {
        draft.validate()?;

        let slot = draft.slot();
        if self.has_conflict(&slot) {
            let warning = ConflictWarning { slot };
            if !confirm.confirm(&warning.to_string()) {
                debug!(date = %warning.slot.date, time = %warning.slot.time, "registration declined on conflict");
                return Ok(Registration::Declined(warning));
            }
        }

        Ok(Registration::Added(self.add_trip(draft)))
    }

    /// Overwrites the status of trip `id`.
    pub fn update_status(&mut self, id: TripId, status: TripStatus) -> Result<(), StoreError> {
        let rec = self.records.get_mut(&id).ok_or(StoreError::MissingTrip(id))?;
        let prev = rec.status;
        rec.status = status;
        self.persist();
        debug!(id, ?prev, ?status, "trip status updated");
        Ok(())
    }

    /// Removes trip `id` and returns it.
    pub fn delete_trip(&mut self, id: TripId) -> Result<TripRecord, StoreError> {
        let trip = self.records.remove(&id).ok_or(StoreError::MissingTrip(id))?;
        if let Some(pos) = self.order.iter().position(|x| *x == id) {
            self.order.remove(pos);
        }
        self.by_slot.remove(&trip.slot(), id);
        self.persist();
        debug!(id, "trip deleted");
        Ok(trip)
    }

    /// Deletes trip `id` after the user accepts [`DELETE_PROMPT`]. Returns `Ok(None)`
    /// when the user declines.
    pub fn delete_confirmed<C: Confirm + ?Sized>(
        &mut self,
        id: TripId,
        confirm: &mut C,
    ) -> Result<Option<TripRecord>, StoreError> {
        if !self.records.contains_key(&id) {
            return Err(StoreError::MissingTrip(id));
        }
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(None);
        }
        self.delete_trip(id).map(Some)
    }

    /// Trip with the given id.
    pub fn get(&self, id: TripId) -> Option<&TripRecord> {
        self.records.get(&id)
    }

    /// Trips in stored order.
    pub fn trips(&self) -> Vec<&TripRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Owned copy of [`TripStore::trips`].
    pub fn trips_cloned(&self) -> Vec<TripRecord> {
        self.trips().into_iter().cloned().collect()
    }

    /// Number of stored trips.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no trips are stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reads the persisted collection without touching in-memory state.
    pub fn load_all(&self) -> Vec<TripRecord> {
        self.repo.load_all()
    }

    /// Non-rejected trip occupying `slot`, if any.
    pub fn find_conflict(&self, slot: &SlotKey) -> Option<&TripRecord> {
        self.by_slot
            .ids(slot)
            .iter()
            .filter_map(|id| self.records.get(id))
            .find(|t| t.status.occupies_slot())
    }

    /// True when a pending or approved trip holds `slot`.
    pub fn has_conflict(&self, slot: &SlotKey) -> bool {
        self.find_conflict(slot).is_some()
    }

    /// Sorted, range-filtered copy of the collection.
    pub fn project(&self, range: DateRange, today: NaiveDate) -> Vec<TripRecord> {
        projector::project(self.trips(), range, today)
    }

    /// Aggregate counts relative to `today`.
    pub fn stats(&self, today: NaiveDate) -> TripStats {
        TripStats::collect(self.trips(), today)
    }

    /// Underlying key-value backend.
    pub fn backend(&self) -> &S {
        self.repo.backend()
    }

    /// Consumes the store, returning its backend.
    pub fn into_backend(self) -> S {
        self.repo.into_backend()
    }

    fn insert_record(&mut self, trip: TripRecord) {
        let id = trip.id;
        self.by_slot.insert(trip.slot(), id);
        self.order.push(id);
        self.records.insert(id, trip);
    }

    fn persist(&mut self) {
        let snapshot = self.trips_cloned();
        if let Err(err) = self.repo.save_all(&snapshot) {
            error!(key = %self.repo.key(), error = %err, count = snapshot.len(), "failed to save trips");
        }
    }

    fn take_next_trip_id(&mut self) -> TripId {
        let records = &self.records;
        allocate_id(&mut self.next_trip_id, |id| records.contains_key(&id))
    }
}

/// Hands out the counter value, or the smallest free id once the counter is
/// exhausted or lands on a taken id.
fn allocate_id(next: &mut Option<TripId>, taken: impl Fn(TripId) -> bool) -> TripId {
    let id = match *next {
        Some(id) if !taken(id) => id,
        // A collection cannot hold every id, so the scan always finds one.
        _ => (1..=TripId::MAX).find(|id| !taken(*id)).unwrap_or(0),
    };
    *next = id.checked_add(1);
    id
}
