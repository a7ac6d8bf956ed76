use hashbrown::HashMap;

use crate::{core::conflict::SlotKey, types::TripId};

/// Ids grouped under a key.
pub type VecIndex<K> = HashMap<K, Vec<TripId>>;

/// Trip ids grouped by the slot they claim, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct SlotIndex {
    inner: VecIndex<SlotKey>,
}

impl SlotIndex {
    /// Appends `id` under `slot`.
    pub fn insert(&mut self, slot: SlotKey, id: TripId) {
        self.inner.entry(slot).or_default().push(id);
    }

    /// Drops `id` from `slot`, forgetting the slot once empty.
    pub fn remove(&mut self, slot: &SlotKey, id: TripId) {
        let Some(ids) = self.inner.get_mut(slot) else {
            return;
        };
        if let Some(pos) = ids.iter().position(|x| *x == id) {
            ids.remove(pos);
        }
        if ids.is_empty() {
            self.inner.remove(slot);
        }
    }

    /// Ids under `slot`, oldest first.
    pub fn ids(&self, slot: &SlotKey) -> &[TripId] {
        self.inner.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forgets every slot.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
