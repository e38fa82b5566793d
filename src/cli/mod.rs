//! Command-line interface for toolpin.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, InstallArgs, VersionArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
