//! Subprocess execution behind an injectable runner.

pub mod command;

pub use command::{CommandResult, CommandRunner, Invocation, SystemRunner};
