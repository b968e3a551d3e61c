use std::io::{self, Write};

use anyhow::{Result, bail};

use super::LineReader;

/// Reads lines from standard input.
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self) -> Result<String> {
        // Prompts are written to stdout; make sure they are visible
        // before blocking on input.
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            bail!("input stream closed");
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
