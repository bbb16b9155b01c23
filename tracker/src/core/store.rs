//! Record store owning the ordered record collection
//!
//! Every successful mutation is mirrored to storage through the
//! persistence adapter. A failed save never undoes the in-memory change;
//! the error is logged and kept for the view to pick up.

use tracing::{debug, warn};

use crate::core::persistence::PersistenceAdapter;
use crate::error::{TrackerError, TrackerResult};
use crate::traits::KeyValueStore;
use shared::{Record, Summary, Thresholds, compute_percentage};

/// Ordered collection of records, insertion order = display order
#[derive(Debug)]
pub struct RecordStore<S> {
    records: Vec<Record>,
    thresholds: Thresholds,
    persistence: PersistenceAdapter<S>,
    write_error: Option<TrackerError>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Create the store from whatever the adapter currently holds
    pub fn hydrate(thresholds: Thresholds, persistence: PersistenceAdapter<S>) -> Self {
        let records = persistence.load(&thresholds);
        debug!("Hydrated {} records from '{}'", records.len(), persistence.key());

        Self {
            records,
            thresholds,
            persistence,
            write_error: None,
        }
    }

    /// Validate and append a new record, then persist.
    ///
    /// # Returns
    /// The stored record, or `EmptyLabel` / `InvalidMetrics` wrapped in
    /// `TrackerError::Validation`. Storage failures do not fail the call.
    pub fn create_record(&mut self, label: &str, orders: f64, complaints: f64) -> TrackerResult<Record> {
        let record = Record::from_input(label, orders, complaints, &self.thresholds)?;
        self.records.push(record.clone());
        self.persist();
        Ok(record)
    }

    /// Remove the record at `index` and persist.
    ///
    /// Out-of-range indices leave the collection and storage untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Record> {
        if index >= self.records.len() {
            debug!("Ignoring removal at {index}, collection has {} records", self.records.len());
            return None;
        }

        let removed = self.records.remove(index);
        self.persist();
        Some(removed)
    }

    /// Remove every record and persist the empty collection
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    pub fn summarize(&self) -> Summary {
        summarize(&self.records, &self.thresholds)
    }

    /// Read-only view of the collection
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Take the error of the most recent failed save, if any
    pub fn take_write_error(&mut self) -> Option<TrackerError> {
        self.write_error.take()
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.records) {
            Ok(()) => self.write_error = None,
            Err(e) => {
                warn!("Changes kept in memory only: {e}");
                self.write_error = Some(e);
            }
        }
    }
}

/// Totals over `records`, classified like a single record would be
pub fn summarize(records: &[Record], thresholds: &Thresholds) -> Summary {
    if records.is_empty() {
        return Summary::NoData;
    }

    let (total_orders, total_complaints) = records.iter().fold((0u64, 0u64), |(orders, complaints), r| {
        (
            orders.saturating_add(r.order_count()),
            complaints.saturating_add(r.complaint_count()),
        )
    });

    let global_percentage = compute_percentage(total_orders as f64, total_complaints as f64);
    Summary::Totals {
        total_orders,
        total_complaints,
        global_percentage,
        global_status: thresholds.classify(global_percentage),
    }
}
