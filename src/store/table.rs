//! Primary table
//!
//! BTreeMap from id to the live record for that id.

use std::collections::BTreeMap;

use crate::record::Employee;

/// Current-state mapping from employee id to its record
#[derive(Debug, Default, Clone)]
pub struct PrimaryTable {
    data: BTreeMap<i64, Employee>,
}

impl PrimaryTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under its id, returning the record it replaced
    pub fn put(&mut self, record: Employee) -> Option<Employee> {
        self.data.insert(record.id, record)
    }

    /// Get the live record for an id
    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.data.get(&id)
    }

    /// Remove the record for an id
    pub fn remove(&mut self, id: i64) -> Option<Employee> {
        self.data.remove(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.data.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate live records in id order
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.data.values()
    }
}
