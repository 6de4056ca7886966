//! Console backed by the process's stdin and stdout.

use std::io::{self, BufRead, Write};
use tictactoe::Console;

/// Interactive terminal console.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Creates a terminal console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }
}
