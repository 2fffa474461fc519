use std::time::Instant;

use crate::model::{ListFilter, Reservation};

use super::{Engine, EngineError};

impl Engine {
    pub fn get(&self, id: &str) -> Result<Reservation, EngineError> {
        let started = Instant::now();
        let result = self
            .store
            .get(id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()));
        self.finish("get", started, result)
    }

    /// Snapshot of every record matching the filter, oldest first. The
    /// backing map is unordered, so ordering is pinned here.
    pub fn list(&self, filter: &ListFilter) -> Vec<Reservation> {
        let started = Instant::now();
        let mut records = self.store.list(|r| filter.matches(r));
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        self.record_op("list", "ok", started);
        records
    }

    /// Number of stored records, cancelled included.
    pub fn count(&self) -> usize {
        self.store.len()
    }
}
