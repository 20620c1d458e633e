//! Line-oriented prompting
//!
//! Generic over reader and writer so sessions can run against stdin/stdout
//! or in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::error::{Result, StaffError};

/// Prompt/read helper around a reader and a writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a newline and flush
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Write a line
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Read one line with the trailing newline removed
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 become
    /// U+FFFD, so they fail numeric parsing like any other bad input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Show a prompt and read the answer
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        self.read_line()
    }

    /// Give back the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse an integer field typed by the user
pub fn parse_int(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| StaffError::invalid_input("invalid input"))
}
