//! Plain terminal output.

use std::io::Write;

use super::{OutputMode, UserInterface};

/// Writes progress to stdout and diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalUI {
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn output(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn begin(&mut self, msg: &str) {
        if self.mode.shows_status() {
            print!("{}", msg);
            let _ = std::io::stdout().flush();
        }
    }

    fn finish(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}
