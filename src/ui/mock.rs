//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion. Text passed to `begin` is joined with the following
//! `finish` into a single captured line, the way it appears on a terminal.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<String>,
    outputs: Vec<String>,
    pending: Option<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all completed lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all command results.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get a line started with `begin` that was never finished.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any completed line contains `msg`.
    pub fn has_line(&self, msg: &str) -> bool {
        self.lines.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if let Some(pending) = self.pending.take() {
            self.lines.push(pending);
        }
        self.lines.push(msg.to_string());
    }

    fn output(&mut self, msg: &str) {
        self.outputs.push(msg.to_string());
    }

    fn begin(&mut self, msg: &str) {
        if let Some(pending) = self.pending.take() {
            self.lines.push(pending);
        }
        self.pending = Some(msg.to_string());
    }

    fn finish(&mut self, msg: &str) {
        let line = match self.pending.take() {
            Some(mut pending) => {
                pending.push_str(msg);
                pending
            }
            None => msg.to_string(),
        };
        self.lines.push(line);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_finish_form_one_line() {
        let mut ui = MockUI::new();
        ui.begin("Installing a@v1.0.0...");
        ui.finish("done");
        assert_eq!(ui.lines(), &["Installing a@v1.0.0...done".to_string()]);
        assert!(ui.pending().is_none());
    }

    #[test]
    fn unfinished_line_stays_pending() {
        let mut ui = MockUI::new();
        ui.begin("Installing a@v1.0.0...");
        assert!(ui.lines().is_empty());
        assert_eq!(ui.pending(), Some("Installing a@v1.0.0..."));
    }

    #[test]
    fn message_flushes_pending_line() {
        let mut ui = MockUI::new();
        ui.begin("partial");
        ui.message("next");
        assert_eq!(ui.lines(), &["partial".to_string(), "next".to_string()]);
    }

    #[test]
    fn outputs_are_kept_apart_from_progress() {
        let mut ui = MockUI::new();
        ui.message("Installing a@v1.0.0 to /bin");
        ui.output("/bin/a");
        assert_eq!(ui.outputs(), &["/bin/a".to_string()]);
        assert!(!ui.has_line("/bin/a"));
    }

    #[test]
    fn warnings_and_errors_are_separate() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.warning("careful");
        ui.error("broken");
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["broken".to_string()]);
        assert!(!ui.has_line("careful"));
    }
}
