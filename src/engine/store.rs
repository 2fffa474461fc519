use std::collections::HashMap;

use parking_lot::{RwLock, RwLockWriteGuard};
use ulid::Ulid;

use crate::model::Reservation;

/// The canonical record set behind a single readers-writer lock.
///
/// Reads (`get`, `list`, `len`) take the shared lock and may run in
/// parallel. Mutations take `write()` and perform their whole
/// check-then-write sequence on the returned guard, so overlap detection
/// and the subsequent insert can never be interleaved by another writer.
/// The lock is synchronous: no await point can abandon a critical section
/// half-applied.
pub struct Store {
    records: RwLock<HashMap<String, Reservation>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Copy of one record.
    pub fn get(&self, id: &str) -> Option<Reservation> {
        self.records.read().get(id).cloned()
    }

    /// Copies of all records matching `pred`, scanned under the read lock.
    pub fn list<F>(&self, pred: F) -> Vec<Reservation>
    where
        F: Fn(&Reservation) -> bool,
    {
        self.records
            .read()
            .values()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Exclusive guard for a full check-then-write sequence.
    pub fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Reservation>> {
        self.records.write()
    }

    /// Fresh identifier, collision-free under concurrent creation.
    pub fn next_id(&self) -> String {
        Ulid::new().to_string()
    }
}
