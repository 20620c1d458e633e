//! Record Store Tests
//!
//! Tests verify:
//! - Insert/get/delete behavior
//! - Last-write-wins on repeated inserts
//! - History growth and removal on delete
//! - NotFound on absent ids

use staffdb::store::{HistoryLog, PrimaryTable, RecordStore};
use staffdb::{Employee, StaffError};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = RecordStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.history().is_empty());
}

#[test]
fn test_insert_and_get() {
    let mut store = RecordStore::new();

    store.insert(1, "Ann", 30, 5000);

    let employee = store.get(1).unwrap();
    assert_eq!(employee, &Employee::new(1, "Ann", 30, 5000));
}

#[test]
fn test_get_never_inserted_is_not_found() {
    let store = RecordStore::new();

    let result = store.get(42);

    assert!(matches!(result, Err(StaffError::NotFound(42))));
}

#[test]
fn test_insert_accepts_any_values() {
    let mut store = RecordStore::new();

    store.insert(-1, "", -20, i64::MIN);

    let employee = store.get(-1).unwrap();
    assert_eq!(employee.age, -20);
    assert_eq!(employee.salary, i64::MIN);
    assert_eq!(employee.name, "");
}

// =============================================================================
// Overwrite Tests
// =============================================================================

#[test]
fn test_last_write_wins() {
    let mut store = RecordStore::new();

    store.insert(3, "First", 20, 100);
    store.insert(3, "Second", 21, 200);
    store.insert(3, "Third", 22, 300);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(3).unwrap(), &Employee::new(3, "Third", 22, 300));
}

#[test]
fn test_repeated_insert_grows_history() {
    let mut store = RecordStore::new();

    store.insert(5, "X", 20, 100);
    store.insert(5, "X", 20, 150);

    let history = store.history_of(5).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].salary, 100);
    assert_eq!(history[1].salary, 150);
    assert_eq!(store.get(5).unwrap().salary, 150);
}

#[test]
fn test_history_count_matches_insert_count() {
    let mut store = RecordStore::new();

    for n in 0..10 {
        store.insert(9, "N", n, n * 10);
    }
    store.insert(8, "Other", 1, 1);

    assert_eq!(store.history_of(9).unwrap().len(), 10);
    assert_eq!(store.history_of(8).unwrap().len(), 1);
    assert_eq!(store.history().total_records(), 11);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_record_and_history() {
    let mut store = RecordStore::new();
    store.insert(1, "Ann", 30, 5000);
    store.insert(1, "Ann", 31, 5500);

    let removed = store.delete(1).unwrap();

    assert_eq!(removed, Employee::new(1, "Ann", 31, 5500));
    assert!(matches!(store.get(1), Err(StaffError::NotFound(1))));
    assert!(store.history_of(1).is_none());
    assert!(!store.contains(1));
}

#[test]
fn test_delete_never_inserted_is_not_found() {
    let mut store = RecordStore::new();

    let result = store.delete(7);

    assert!(matches!(result, Err(StaffError::NotFound(7))));
}

#[test]
fn test_delete_twice_fails_second_time() {
    let mut store = RecordStore::new();
    store.insert(2, "Bo", 40, 6000);

    assert!(store.delete(2).is_ok());
    let second = store.delete(2);

    assert!(second.unwrap_err().is_not_found());
}

#[test]
fn test_delete_leaves_other_ids_alone() {
    let mut store = RecordStore::new();
    store.insert(1, "Ann", 30, 5000);
    store.insert(2, "Bo", 40, 6000);

    store.delete(1).unwrap();

    assert_eq!(store.get(2).unwrap().name, "Bo");
    assert_eq!(store.history_of(2).unwrap().len(), 1);
    assert_eq!(store.history().len(), 1);
}

#[test]
fn test_reinsert_after_delete_starts_fresh_history() {
    let mut store = RecordStore::new();
    store.insert(4, "Old", 50, 1);
    store.insert(4, "Old", 51, 2);
    store.delete(4).unwrap();

    store.insert(4, "New", 25, 3);

    let history = store.history_of(4).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].name, "New");
}

#[test]
fn test_instances_are_independent() {
    let mut a = RecordStore::new();
    let b = RecordStore::new();

    a.insert(1, "Ann", 30, 5000);

    assert!(a.contains(1));
    assert!(b.get(1).is_err());
    assert!(b.history().is_empty());
}

// =============================================================================
// Component Tests
// =============================================================================

#[test]
fn test_primary_table_put_returns_replaced() {
    let mut table = PrimaryTable::new();

    assert!(table.put(Employee::new(1, "A", 1, 1)).is_none());
    let replaced = table.put(Employee::new(1, "B", 2, 2));

    assert_eq!(replaced, Some(Employee::new(1, "A", 1, 1)));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_records_iterate_in_id_order() {
    let mut store = RecordStore::new();
    store.insert(30, "c", 1, 1);
    store.insert(10, "a", 1, 1);
    store.insert(20, "b", 1, 1);

    let names: Vec<&str> = store.records().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_history_log_remove_absent_id() {
    let mut log = HistoryLog::new();
    assert!(log.remove(1).is_none());
    assert!(log.entries(1).is_none());
}
