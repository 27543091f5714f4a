//! Line-based terminal I/O.

use crate::error::Result;
use std::io::{BufRead, Write};

const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Prompt/answer channel over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Write a full line.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt` on the current line and read the reply.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.read_reply()
    }

    /// Read one line, trimmed and uppercased. `None` at end of input.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read_reply(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_uppercase()))
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            self.output.write_all(CLEAR_SEQUENCE.as_bytes())?;
        }
        Ok(())
    }
}
