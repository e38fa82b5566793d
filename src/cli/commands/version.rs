//! Version command implementation.
//!
//! The `toolpin version` command prints the version a module is pinned to.

use std::path::{Path, PathBuf};

use crate::cli::args::VersionArgs;
use crate::config::ToolpinConfig;
use crate::error::Result;
use crate::manifest::module_version_in;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    project_root: PathBuf,
    config: ToolpinConfig,
    args: VersionArgs,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(project_root: &Path, config: ToolpinConfig, args: VersionArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = self.config.manifest_path(&self.project_root);

        match module_version_in(&manifest, &self.args.module)? {
            Some(version) => ui.output(&version),
            None => ui.warning(&format!(
                "No readable manifest at {}; nothing is pinned",
                manifest.display()
            )),
        }
        Ok(CommandResult::success())
    }
}
