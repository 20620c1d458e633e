//! Employee record
//!
//! The single record shape stored and exported by staffdb.

use serde::{Deserialize, Serialize};

/// An employee record
///
/// Field names in JSON follow the export file format: the id is written
/// under `"int"`, the rest capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique key in the primary table
    #[serde(rename = "int")]
    pub id: i64,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Age")]
    pub age: i64,

    #[serde(rename = "Salary")]
    pub salary: i64,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>, age: i64, salary: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            salary,
        }
    }
}
