//! Booking engine: reservation records, conflict detection and the
//! lifecycle rules that gate every mutation.
//!
//! All writes funnel through one exclusive critical section per
//! operation, so an overlap scan and the insert it protects can never
//! interleave with another writer.

mod conflict;
mod error;
mod lifecycle;
mod mutations;
mod queries;
mod store;


use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

pub use error::EngineError;
pub use store::Store;

use crate::directory::HotelDirectory;
use crate::model::Reservation;
use crate::notify::EventHub;
use crate::observability;

pub struct Engine {
    pub(crate) store: Store,
    pub(crate) directory: Arc<dyn HotelDirectory>,
    pub(crate) events: Arc<EventHub>,
    pub(crate) max_guests: u32,
}

impl Engine {
    pub fn new(directory: Arc<dyn HotelDirectory>, events: Arc<EventHub>, max_guests: u32) -> Self {
        Self {
            store: Store::new(),
            directory,
            events,
            max_guests,
        }
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Bulk-load previously persisted records. Trusted input: no overlap
    /// or lifecycle checks, records land exactly as given. Blank ids get
    /// fresh ones. Returns the number of records loaded.
    pub fn restore(&self, records: Vec<Reservation>) -> usize {
        let mut map = self.store.write();
        let mut loaded = 0;
        for mut record in records {
            if record.id.is_empty() {
                record.id = self.store.next_id();
            }
            map.insert(record.id.clone(), record);
            loaded += 1;
        }
        refresh_active_gauge(&map);
        loaded
    }

    pub(crate) fn finish<T>(
        &self,
        op: &'static str,
        started: Instant,
        result: Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        match &result {
            Ok(_) => self.record_op(op, "ok", started),
            Err(e) => {
                if let EngineError::Overlap { .. } = e {
                    metrics::counter!(observability::CONFLICTS_TOTAL).increment(1);
                }
                self.record_op(op, e.outcome(), started);
            }
        }
        result
    }

    pub(crate) fn record_op(&self, op: &'static str, outcome: &'static str, started: Instant) {
        metrics::counter!(observability::OPERATIONS_TOTAL, "op" => op, "outcome" => outcome)
            .increment(1);
        metrics::histogram!(observability::OPERATION_DURATION_SECONDS, "op" => op)
            .record(started.elapsed().as_secs_f64());
    }
}

pub(crate) fn refresh_active_gauge(records: &HashMap<String, Reservation>) {
    let active = records.values().filter(|r| r.is_active()).count();
    metrics::gauge!(observability::RESERVATIONS_ACTIVE).set(active as f64);
}
