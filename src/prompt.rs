//! Validated input collection.

use anyhow::{Result, bail};

use crate::console::{LineReader, MessageSink};

/// Option pair used by every confirmation prompt.
pub const YES_NO: [&str; 2] = ["yes", "no"];

/// Collects answers from a [`LineReader`], retrying until one matches an
/// allowed option.
pub struct Prompter<'a> {
    reader: &'a mut dyn LineReader,
    sink: &'a dyn MessageSink,
    max_attempts: Option<usize>,
}

impl<'a> Prompter<'a> {
    /// `max_attempts` bounds consecutive invalid answers per prompt;
    /// `None` retries indefinitely.
    pub fn new(
        reader: &'a mut dyn LineReader,
        sink: &'a dyn MessageSink,
        max_attempts: Option<usize>,
    ) -> Self {
        Self {
            reader,
            sink,
            max_attempts,
        }
    }

    /// Prompts until the user types one of `options`, compared
    /// case-insensitively, and returns the matched option in its listed
    /// casing.
    ///
    /// # Errors
    ///
    /// Fails when the reader is exhausted, or when `max_attempts`
    /// consecutive invalid answers were given.
    pub fn select<S: AsRef<str>>(&mut self, prompt: &str, options: &[S]) -> Result<String> {
        let joined = options
            .iter()
            .map(|o| o.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        self.sink
            .info(&format!("\n{}\n   Valid options are: {}", prompt, joined));

        let mut invalid = 0usize;
        loop {
            let line = self.reader.read_line()?;
            let typed = line.trim();

            if let Some(hit) = options
                .iter()
                .find(|o| o.as_ref().eq_ignore_ascii_case(typed))
            {
                return Ok(hit.as_ref().to_string());
            }

            invalid += 1;
            if let Some(max) = self.max_attempts {
                if invalid >= max {
                    bail!("no valid answer after {} attempts", max);
                }
            }
            self.sink.error(&format!(
                "\n   Sorry but \"{}\" is not a valid value.\n   Valid options are: {}",
                typed, joined
            ));
        }
    }
}
