use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use super::{Level, MessageSink};

/// Writes messages to stdout, coloring errors when attached to a
/// terminal so piped output stays plain.
pub struct TerminalSink {
    color: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for TerminalSink {
    fn render(&self, text: &str, level: Level) {
        match level {
            Level::Error if self.color => println!("{}", text.red()),
            Level::Info | Level::Error => println!("{}", text),
        }
    }
}
