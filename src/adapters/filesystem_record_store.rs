use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record_codec;
use crate::domain::{PersistenceError, Reservation, StorageSettings};
use crate::ports::RecordStore;

/// Filesystem-backed record store: one JSON file per namespace.
///
/// Writes go to a sibling temporary file that is then renamed over the store
/// file, so readers see either the old list or the new one.
#[derive(Debug, Clone)]
pub struct FilesystemRecordStore {
    path: PathBuf,
    quota_bytes: u64,
}

impl FilesystemRecordStore {
    /// Create a store for `<data_dir>/<namespace>.json`.
    pub fn new(data_dir: &Path, namespace: &str, quota_bytes: u64) -> Self {
        Self { path: data_dir.join(format!("{}.json", namespace)), quota_bytes }
    }

    /// Create a store from storage settings.
    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(&settings.data_dir, &settings.namespace, settings.quota_bytes)
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl RecordStore for FilesystemRecordStore {
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "record store absent, reading empty list");
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let records = record_codec::decode(&content).map_err(|e| PersistenceError::Corrupt {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        debug!(path = %self.path.display(), count = records.len(), "loaded reservations");
        Ok(records)
    }

    fn save(&self, records: &[Reservation]) -> Result<(), PersistenceError> {
        let bytes = record_codec::encode(records, self.quota_bytes)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, &bytes).map_err(|e| PersistenceError::io(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(PersistenceError::io(&self.path, e));
        }

        debug!(
            path = %self.path.display(),
            count = records.len(),
            bytes = bytes.len(),
            "saved reservations"
        );
        Ok(())
    }
}
