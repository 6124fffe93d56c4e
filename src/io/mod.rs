//! Input/output abstractions
//!
//! The terminal driver talks to the player only through these traits so the
//! command loop can be tested with scripted input.

use std::io::{self, BufRead, Write};

/// Source of player commands
pub trait InputReader {
    /// Show `prompt` and read one line. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Sink for game output
pub trait OutputWriter {
    fn writeln(&mut self, message: &str);
}

/// stdin/stdout implementation
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        Ok((read > 0).then_some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
