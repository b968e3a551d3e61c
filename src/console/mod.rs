//! Console collaborators: line input and message output.
//!
//! The interactive core talks to the terminal only through the
//! [`LineReader`] and [`MessageSink`] traits, so a whole conversation can
//! be scripted in tests without a real terminal.

mod reader;
mod sink;

pub use reader::StdinReader;
pub use sink::TerminalSink;

use anyhow::Result;

/// Severity of a rendered message. Errors are visually distinguished but
/// carry no different data contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Blocking source of user-typed lines.
pub trait LineReader {
    /// Returns the next line without its trailing newline.
    ///
    /// # Errors
    ///
    /// Reaching the end of the input stream is an error; it is the only
    /// way out of an otherwise unbounded prompt loop.
    fn read_line(&mut self) -> Result<String>;
}

/// Destination for user-facing text.
pub trait MessageSink {
    fn render(&self, text: &str, level: Level);

    fn info(&self, text: &str) {
        self.render(text, Level::Info);
    }

    fn error(&self, text: &str) {
        self.render(text, Level::Error);
    }
}
