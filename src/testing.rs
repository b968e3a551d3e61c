//! Scriptable console doubles used by the unit and integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, bail};

use crate::console::{Level, LineReader, MessageSink};

/// A [`LineReader`] that replays a fixed sequence of answers.
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self) -> Result<String> {
        match self.lines.pop_front() {
            Some(line) => Ok(line),
            None => bail!("scripted input exhausted"),
        }
    }
}

/// A [`MessageSink`] that records every rendered message.
pub struct RecordingSink {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// All rendered text joined with newlines, for substring assertions.
    pub fn transcript(&self) -> String {
        self.messages
            .borrow()
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for RecordingSink {
    fn render(&self, text: &str, level: Level) {
        self.messages.borrow_mut().push((level, text.to_string()));
    }
}
