//! Menu session
//!
//! The read-prompt-act loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, StaffError};
use crate::export::Exporter;
use crate::record::Employee;
use crate::store::RecordStore;

use super::{parse_int, MenuCommand, Prompter};

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// An interactive session over a record store
pub struct Session<R, W> {
    store: RecordStore,
    exporter: Exporter,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty store
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self::with_store(RecordStore::new(), Exporter::new(config), input, output)
    }

    /// Start a session over an existing store
    pub fn with_store(store: RecordStore, exporter: Exporter, input: R, output: W) -> Self {
        Self {
            store,
            exporter,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until Exit is chosen or input ends
    ///
    /// Command failures are printed and the loop continues. Only a failure
    /// of the terminal streams themselves is returned.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompter.write(&MenuCommand::menu_text())?;

            let Some(choice) = self.prompter.read_line()? else {
                debug!("Input closed, ending session");
                return Ok(());
            };

            let flow = match MenuCommand::parse(&choice) {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    self.report(&e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Current store state
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Tear down, giving back the store and the writer
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.prompter.into_output())
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    fn execute(&mut self, command: MenuCommand) -> io::Result<Flow> {
        debug!(?command, "Executing menu command");

        match command {
            MenuCommand::Add => self.add(),
            MenuCommand::Get => self.get(),
            MenuCommand::Delete => self.delete(),
            MenuCommand::Export => self.export(),
            MenuCommand::Exit => self.exit(),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompter.ask("\nEnter employee ID: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(name) = self.prompter.ask("Enter employee name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(age) = self.prompter.ask("Enter employee age: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(salary) = self.prompter.ask("Enter employee salary: ")? else {
            return Ok(Flow::Stop);
        };

        let fields = parse_int(&id).and_then(|id| {
            Ok((id, parse_int(&age)?, parse_int(&salary)?))
        });

        match fields {
            Ok((id, age, salary)) => {
                self.store.insert(id, name.trim(), age, salary);
                self.info("employee was successfully added to the database")?;
            }
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn get(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompter.ask("\nEnter employee ID: ")? else {
            return Ok(Flow::Stop);
        };

        let found = parse_int(&id).and_then(|id| self.store.get(id).cloned());

        match found {
            Ok(employee) => self.prompter.say(&format_employee(&employee))?,
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompter.ask("\nEnter employee ID: ")? else {
            return Ok(Flow::Stop);
        };

        match parse_int(&id).and_then(|id| self.store.delete(id)) {
            Ok(_) => self.info("employee was successfully deleted from the database")?,
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("\nEnter the file name: ")? else {
            return Ok(Flow::Stop);
        };

        match self.exporter.export(self.store.history(), &name) {
            Ok(path) => self.info(&format!(
                "all employees were successfully exported to {}",
                path.display()
            ))?,
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> io::Result<Flow> {
        self.prompter.write("\n[Info] press enter to exit\n\n- ")?;
        self.prompter.read_line()?;
        Ok(Flow::Stop)
    }

    // =========================================================================
    // Output Helpers
    // =========================================================================

    fn info(&mut self, message: &str) -> io::Result<()> {
        self.prompter.say(&format!("\n[Info] {}", message))
    }

    fn report(&mut self, error: &StaffError) -> io::Result<()> {
        warn!(error = %error, "Menu command failed");
        self.prompter.say(&format!("\n[Error] {}", error))
    }
}

/// Display block for a single employee
fn format_employee(employee: &Employee) -> String {
    format!(
        "\nID: {}\nname: {}\nage: {}\nsalary: {}$",
        employee.id, employee.name, employee.age, employee.salary
    )
}
