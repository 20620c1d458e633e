//! Menu Module
//!
//! Interactive text menu over a `RecordStore`.
//!
//! ## Menu
//! ```text
//! [Menu] choose an option
//! 1. Add an employee to the database
//! 2. Get employee details
//! 3. Delete an employee from the database
//! 4. Export employee data to a file
//! 5. Exit
//! ```
//!
//! Every failure inside one menu iteration is printed as `[Error] ...` and
//! the menu is shown again. Only a broken terminal stream ends the session
//! with an error. End of input ends it cleanly.

mod command;
mod prompt;
mod session;

pub use command::MenuCommand;
pub use prompt::{parse_int, Prompter};
pub use session::Session;
