//! Menu command definitions

use crate::error::{Result, StaffError};

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuCommand {
    Add = 1,
    Get = 2,
    Delete = 3,
    Export = 4,
    Exit = 5,
}

impl MenuCommand {
    /// All commands in menu order
    pub const ALL: [MenuCommand; 5] = [
        MenuCommand::Add,
        MenuCommand::Get,
        MenuCommand::Delete,
        MenuCommand::Export,
        MenuCommand::Exit,
    ];

    /// Parse a menu choice typed by the user
    ///
    /// Non-numeric text is `"invalid input"`, an unmapped number is
    /// `"not an option"`.
    pub fn parse(text: &str) -> Result<Self> {
        let choice: i64 = text
            .trim()
            .parse()
            .map_err(|_| StaffError::invalid_input("invalid input"))?;

        match choice {
            1 => Ok(MenuCommand::Add),
            2 => Ok(MenuCommand::Get),
            3 => Ok(MenuCommand::Delete),
            4 => Ok(MenuCommand::Export),
            5 => Ok(MenuCommand::Exit),
            _ => Err(StaffError::invalid_input("not an option")),
        }
    }

    /// Number shown in the menu
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Text shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Add => "Add an employee to the database",
            MenuCommand::Get => "Get employee details",
            MenuCommand::Delete => "Delete an employee from the database",
            MenuCommand::Export => "Export employee data to a file",
            MenuCommand::Exit => "Exit",
        }
    }

    /// The full menu, ending with the input marker
    pub fn menu_text() -> String {
        let mut text = String::from("\n[Menu] choose an option\n");
        for command in Self::ALL {
            text.push_str(&format!("{}. {}\n", command.code(), command.label()));
        }
        text.push_str("\n- ");
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_parse() {
        for command in MenuCommand::ALL {
            let parsed = MenuCommand::parse(&command.code().to_string()).unwrap();
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn test_menu_text_lists_every_option() {
        let text = MenuCommand::menu_text();
        assert!(text.contains("1. Add an employee to the database"));
        assert!(text.contains("5. Exit"));
    }
}
