/// In-process backend.
pub mod memory;
/// SQLite backend.
pub mod sqlite;

use tracing::warn;

use crate::trip::TripRecord;

/// Backend or serialization failure.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// SQLite backend error.
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Stored value is not a valid trip array.
    #[error("serialization: {0}")]
    Serde(#[from] serde_json::Error),
    /// Any other backend failure.
    #[error("{0}")]
    Message(String),
}

/// Result alias for persistence calls.
pub type PersistResult<T> = Result<T, PersistError>;

/// Whole-value get/set storage, the shape of browser local storage.
pub trait KvStore: Send {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> PersistResult<Option<Vec<u8>>>;
    /// Replaces the value for `key`.
    fn set(&mut self, key: &str, value: &[u8]) -> PersistResult<()>;
}

/// Reads and writes the full trip collection as one JSON array under a fixed key.
#[derive(Debug)]
pub struct TripRepository<S> {
    backend: S,
    key: String,
}

impl<S: KvStore> TripRepository<S> {
    /// Wraps `backend`, storing the collection under `key`.
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Storage key of the collection.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored collection, falling back to empty on any failure.
    pub fn load_all(&self) -> Vec<TripRecord> {
        match self.try_load_all() {
            Ok(trips) => trips,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to load trips, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads the stored collection; a missing or empty value is an empty list.
    pub fn try_load_all(&self) -> PersistResult<Vec<TripRecord>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Replaces the stored collection with `trips`.
    pub fn save_all(&mut self, trips: &[TripRecord]) -> PersistResult<()> {
        let payload = serde_json::to_vec(trips)?;
        self.backend.set(&self.key, &payload)
    }

    /// Underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Consumes the repository, returning its backend.
    pub fn into_backend(self) -> S {
        self.backend
    }
}
