//! Persistence adapter mirroring the record collection into key-value storage
//!
//! The collection is written as a JSON array under a single key. Loading is
//! fail-open: a missing or unreadable value yields an empty collection, and
//! the derived percentage/status of every stored record is recomputed with
//! the current thresholds instead of being trusted.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::traits::KeyValueStore;
use shared::{Record, Thresholds};

/// On-disk shape of one record. Derived fields are read only to detect drift.
///
/// The Spanish aliases accept collections saved under the legacy field names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    #[serde(default, alias = "etiqueta")]
    label: String,
    #[serde(default, alias = "pedidos")]
    order_count: Option<f64>,
    #[serde(default, alias = "reclamos")]
    complaint_count: Option<f64>,
    #[serde(default, alias = "estado")]
    status: Option<serde_json::Value>,
}

/// Reads and writes the record collection under one storage key
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize the full collection and write it under the storage key
    pub fn save(&self, records: &[Record]) -> TrackerResult<()> {
        let payload =
            serde_json::to_string(records).map_err(|e| TrackerError::storage_write(&self.key, e))?;
        self.storage.set(&self.key, &payload)?;
        debug!("Saved {} records under '{}'", records.len(), self.key);
        Ok(())
    }

    /// Load the collection, falling back to an empty one on any failure
    pub fn load(&self, thresholds: &Thresholds) -> Vec<Record> {
        match self.try_load(thresholds) {
            Ok(records) => records,
            Err(e) => {
                warn!("{e}; starting with an empty collection");
                Vec::new()
            }
        }
    }

    /// Load the collection, reporting unreadable data as `StorageReadError`.
    ///
    /// Entries that are mistyped or fail validation are skipped; the rest
    /// load. Only a value that is not a JSON array fails as a whole.
    pub fn try_load(&self, thresholds: &Thresholds) -> TrackerResult<Vec<Record>> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e @ TrackerError::StorageReadError { .. }) => return Err(e),
            Err(e) => return Err(TrackerError::storage_read(&self.key, e)),
        };

        let stored: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| TrackerError::storage_read(&self.key, e))?;

        let mut records = Vec::with_capacity(stored.len());
        let mut healed = 0usize;
        for (position, value) in stored.into_iter().enumerate() {
            let entry = match serde_json::from_value::<StoredRecord>(value) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping stored record #{position} under '{}': {e}", self.key);
                    continue;
                }
            };
            let orders = entry.order_count.unwrap_or(f64::NAN);
            let complaints = entry.complaint_count.unwrap_or(f64::NAN);

            match Record::from_input(&entry.label, orders, complaints, thresholds) {
                Ok(record) => {
                    let stored_status = entry.status.as_ref().and_then(|value| value.as_str());
                    if stored_status != Some(record.status().label()) {
                        healed += 1;
                    }
                    records.push(record);
                }
                Err(e) => warn!("Skipping stored record #{position} under '{}': {e}", self.key),
            }
        }

        if healed > 0 {
            debug!("Recomputed status for {healed} stored records under '{}'", self.key);
        }

        Ok(records)
    }
}
