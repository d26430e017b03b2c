use std::cell::Cell;

use crate::domain::{PersistenceError, Reservation};
use crate::ports::RecordStore;

/// Record store whose reads succeed with a fixed list and whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingRecordStore {
    pub existing: Vec<Reservation>,
    pub save_attempts: Cell<usize>,
}

impl FailingRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for FailingRecordStore {
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError> {
        Ok(self.existing.clone())
    }

    fn save(&self, _records: &[Reservation]) -> Result<(), PersistenceError> {
        self.save_attempts.set(self.save_attempts.get() + 1);
        Err(PersistenceError::QuotaExceeded { needed: 1, quota: 0 })
    }
}
