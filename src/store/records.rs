//! Record store
//!
//! Owns the primary table and the history log and keeps them in step.

use tracing::debug;

use crate::error::{Result, StaffError};
use crate::record::Employee;

use super::{HistoryLog, PrimaryTable};

/// The record store
///
/// Sole mutator of both the primary table and the history log. Each
/// instance is independent; nothing is process-wide.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Live record per id
    table: PrimaryTable,

    /// Every record inserted per id, cleared on delete
    history: HistoryLog,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record
    ///
    /// Overwrites any current record for `id` and appends to its history.
    /// Never fails: values are accepted as given.
    pub fn insert(&mut self, id: i64, name: impl Into<String>, age: i64, salary: i64) {
        let record = Employee::new(id, name, age, salary);

        let replaced = self.table.put(record.clone());
        self.history.append(record);

        debug!(id, overwrite = replaced.is_some(), "Inserted employee");
    }

    /// Look up the current record for an id
    pub fn get(&self, id: i64) -> Result<&Employee> {
        self.table.get(id).ok_or(StaffError::NotFound(id))
    }

    /// Delete an id
    ///
    /// Removes the live record and the id's entire history. Fails with
    /// `NotFound` if the id has no live record.
    pub fn delete(&mut self, id: i64) -> Result<Employee> {
        let record = self.table.remove(id).ok_or(StaffError::NotFound(id))?;
        let dropped = self.history.remove(id).map_or(0, |h| h.len());

        debug!(id, history_dropped = dropped, "Deleted employee");

        Ok(record)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// True if the id has a live record
    pub fn contains(&self, id: i64) -> bool {
        self.table.contains(id)
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Live records in id order
    pub fn records(&self) -> impl Iterator<Item = &Employee> {
        self.table.iter()
    }

    /// The full history log (the export artifact)
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// History of a single id, oldest first
    pub fn history_of(&self, id: i64) -> Option<&[Employee]> {
        self.history.entries(id)
    }
}
