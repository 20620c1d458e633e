//! History log
//!
//! Every record inserted under an id, oldest first. This is what gets
//! exported.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::Employee;

/// Mapping from id to the sequence of records ever inserted under it
///
/// Serializes as a JSON object keyed by stringified id, ordered numerically.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: BTreeMap<i64, Vec<Employee>>,
}

impl HistoryLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the history of its id
    pub fn append(&mut self, record: Employee) {
        self.entries.entry(record.id).or_default().push(record);
    }

    /// Drop the whole history of an id
    pub fn remove(&mut self, id: i64) -> Option<Vec<Employee>> {
        self.entries.remove(&id)
    }

    /// Records inserted under an id, oldest first
    pub fn entries(&self, id: i64) -> Option<&[Employee]> {
        self.entries.get(&id).map(Vec::as_slice)
    }

    /// Number of ids with a history
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records across all ids
    pub fn total_records(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate (id, history) pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[Employee])> {
        self.entries.iter().map(|(id, records)| (*id, records.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = HistoryLog::new();
        log.append(Employee::new(7, "A", 20, 100));
        log.append(Employee::new(7, "B", 21, 200));

        let history = log.entries(7).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].name, "A");
        assert_eq!(history[1].name, "B");
    }

    #[test]
    fn test_iter_is_ordered_by_numeric_id() {
        let mut log = HistoryLog::new();
        log.append(Employee::new(10, "ten", 1, 1));
        log.append(Employee::new(-3, "neg", 1, 1));
        log.append(Employee::new(2, "two", 1, 1));

        let ids: Vec<i64> = log.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![-3, 2, 10]);
    }

    #[test]
    fn test_total_records() {
        let mut log = HistoryLog::new();
        log.append(Employee::new(1, "a", 1, 1));
        log.append(Employee::new(1, "b", 1, 1));
        log.append(Employee::new(2, "c", 1, 1));

        assert_eq!(log.len(), 2);
        assert_eq!(log.total_records(), 3);
    }
}
