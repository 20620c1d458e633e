//! Store Module
//!
//! In-memory record storage keyed by employee id.
//!
//! ## Responsibilities
//! - Hold the single current record per id (primary table)
//! - Keep every record ever inserted per id (history log)
//! - Point lookup and delete by id
//!
//! ## Coupling Between Table and Log
//! ```text
//!   insert(id) ──▶ table[id] = record        (overwrite)
//!              └─▶ log[id].push(record)      (append)
//!
//!   delete(id) ──▶ table.remove(id)
//!              └─▶ log.remove(id)            (whole history dropped)
//! ```
//!
//! Both structures are `BTreeMap`-backed so iteration and export follow
//! numeric id order.

mod table;
mod history;
mod records;

pub use table::PrimaryTable;
pub use history::HistoryLog;
pub use records::RecordStore;
