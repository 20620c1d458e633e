//! Export Module
//!
//! Serializes the history log to a JSON file.
//!
//! ## File Format
//! ```text
//! {
//!  "2": [
//!   {
//!    "int": 2,
//!    "Name": "Bo",
//!    "Age": 40,
//!    "Salary": 6000
//!   }
//!  ]
//! }
//! ```
//!
//! One object keyed by stringified id (numeric order), each value the
//! id's records oldest first. Indent is `Config::indent_width` spaces per
//! level; there is no trailing newline.
//!
//! ## Write Path
//! Render to memory, write a uniquely named temp file in the target's
//! directory, then rename it over the target. A failed render or write
//! leaves the target untouched. The rename replaces the target file itself:
//! a symlink at the target is replaced, not followed, and the new file gets
//! default permissions.

mod exporter;

pub use exporter::Exporter;
