//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::ToolpinConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Process exit status. Codes outside `0..=255` become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config: ToolpinConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root and resolved config.
    pub fn new(project_root: PathBuf, config: ToolpinConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Version(args) => {
                let cmd = super::version::VersionCommand::new(
                    &self.project_root,
                    self.config.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(
                    &self.project_root,
                    self.config.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
        }
    }
}
