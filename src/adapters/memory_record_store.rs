use std::sync::{Arc, Mutex, MutexGuard};

use super::record_codec;
use crate::domain::{PersistenceError, Reservation};
use crate::ports::RecordStore;

/// In-memory record store for tests and embedding.
///
/// Clones share the same list. The quota is checked against the JSON size the
/// durable store would write.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore {
    records: Arc<Mutex<Vec<Reservation>>>,
    quota_bytes: u64,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::with_quota(u64::MAX)
    }

    pub fn with_quota(quota_bytes: u64) -> Self {
        Self { records: Arc::new(Mutex::new(Vec::new())), quota_bytes }
    }

    /// Number of stored reservations.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Reservation>> {
        // The list is replaced wholesale under the lock, so a poisoned guard still
        // holds a complete list.
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError> {
        Ok(self.lock().clone())
    }

    fn save(&self, records: &[Reservation]) -> Result<(), PersistenceError> {
        record_codec::encode(records, self.quota_bytes)?;
        *self.lock() = records.to_vec();
        Ok(())
    }
}
