//! Tracker session: the context object a view layer holds
//!
//! Startup is strictly sequenced: the configuration is fetched first and
//! only then is the record store hydrated from storage. A session exists
//! only after both steps, so nothing can mutate records before the
//! thresholds and storage key are known.

use shared::logging;
use shared::{Record, SessionId, Summary, session_debug, session_info, session_warn};

use crate::config::{TrackerConfig, load_config};
use crate::core::{PersistenceAdapter, RecordStore};
use crate::error::{TrackerError, TrackerResult};
use crate::traits::{ConfigSource, KeyValueStore};

/// One running tracker: configuration plus the record store
#[derive(Debug)]
pub struct TrackerSession<S> {
    session_id: SessionId,
    config: TrackerConfig,
    store: RecordStore<S>,
}

impl<S: KeyValueStore> TrackerSession<S> {
    /// Load configuration from `source`, then hydrate records from `storage`
    pub async fn start(source: &dyn ConfigSource, storage: S) -> Self {
        let session_id = SessionId::new();
        logging::log_startup(&session_id, &format!("tracker session (config: {})", source.describe()));

        let config = load_config(source).await;
        Self::open(session_id, config, storage)
    }

    /// Start with an already resolved configuration
    pub fn with_config(config: TrackerConfig, storage: S) -> Self {
        let session_id = SessionId::new();
        logging::log_startup(&session_id, "tracker session (preloaded config)");
        Self::open(session_id, config, storage)
    }

    fn open(session_id: SessionId, config: TrackerConfig, storage: S) -> Self {
        let persistence = PersistenceAdapter::new(storage, config.storage_key.clone());
        let store = RecordStore::hydrate(config.thresholds, persistence);

        logging::log_progress(
            &session_id,
            "hydrate",
            &format!("{} records under '{}'", store.len(), config.storage_key),
        );

        Self {
            session_id,
            config,
            store,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Read-only snapshot of the records
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn create_record(&mut self, label: &str, orders: f64, complaints: f64) -> TrackerResult<Record> {
        match self.store.create_record(label, orders, complaints) {
            Ok(record) => {
                session_info!(
                    self.session_id,
                    "Added '{}' ({} orders, {} complaints, {:.2}% {})",
                    record.label(),
                    record.order_count(),
                    record.complaint_count(),
                    record.percentage(),
                    record.status()
                );
                Ok(record)
            }
            Err(e) => {
                session_debug!(self.session_id, "Rejected record: {}", e);
                Err(e)
            }
        }
    }

    /// Remove an already-confirmed record. Out-of-range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<Record> {
        let removed = self.store.remove_at(index);
        match &removed {
            Some(record) => {
                session_info!(self.session_id, "Removed '{}' at {}", record.label(), index);
            }
            None => {
                session_warn!(self.session_id, "No record at {} to remove", index);
            }
        }
        removed
    }

    /// Remove every record. Callers confirm first.
    pub fn clear(&mut self) {
        let count = self.store.len();
        self.store.clear();
        logging::log_success(&self.session_id, &format!("Cleared {count} records"));
    }

    pub fn summarize(&self) -> Summary {
        self.store.summarize()
    }

    /// Non-fatal storage failure from the last mutation, if any
    pub fn take_write_error(&mut self) -> Option<TrackerError> {
        self.store.take_write_error()
    }

    /// Log the end of the session
    pub fn close(self, reason: &str) {
        logging::log_shutdown(&self.session_id, reason);
    }
}
