use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Line-based terminal: print a prompt, read one line back.
///
/// Generic over the reader and writer so tests can script a whole game.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Show `text` without a newline and wait for the player's line.
    ///
    /// Returns `None` once the input is closed. Bytes that are not UTF-8 are
    /// replaced rather than rejected, so they reach the game as ordinary bad input.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("failed to write prompt")?;
        // The prompt has no newline, so push it out before blocking on input
        self.output.flush().context("failed to flush prompt")?;

        // Read raw bytes up to the newline
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read line")?;

        // Zero bytes means the input is closed
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
