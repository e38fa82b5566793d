//! Progress output.
//!
//! This module provides:
//! - [`UserInterface`] trait so the installer's progress lines can be captured
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use toolpin::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.begin("Installing templ@v0.2.543...");
//! ui.finish("done");
//! assert_eq!(ui.lines(), &["Installing templ@v0.2.543...done".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;

/// Trait for user-visible output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a full progress line.
    fn message(&mut self, msg: &str);

    /// Display a command result. Shown in every output mode.
    fn output(&mut self, msg: &str);

    /// Start a line without terminating it (e.g., `Installing x...`).
    fn begin(&mut self, msg: &str);

    /// Complete a line started with [`UserInterface::begin`].
    fn finish(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
