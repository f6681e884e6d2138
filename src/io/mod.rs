//! Input/output abstractions
//!
//! Provides traits for reading sample lines and writing reports, so the
//! inspector can run against stdin/stdout or against mocks in tests.

use std::io::{self, BufRead};

/// Trait for reading input one line at a time
pub trait InputReader {
    /// Read the next line, without its line terminator.
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self) -> Result<Option<String>, io::Error> {
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let trimmed = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(trimmed);
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
