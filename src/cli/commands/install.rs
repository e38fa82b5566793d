//! Install command implementation.
//!
//! The `toolpin install` command makes a tool available, installing it only
//! when it cannot already be found.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::config::ToolpinConfig;
use crate::error::{Result, ToolpinError};
use crate::install::{ToolInstaller, ToolSpec};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    project_root: PathBuf,
    config: ToolpinConfig,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(project_root: &Path, config: ToolpinConfig, args: InstallArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Build the tool spec from the arguments.
    pub fn spec(&self) -> Result<ToolSpec> {
        let spec = match (&self.args.version, &self.args.from_manifest) {
            (Some(version), _) => ToolSpec::new(&self.args.command, &self.args.package, version),
            (None, Some(module)) => ToolSpec::from_manifest(
                &self.args.command,
                &self.args.package,
                &self.config.manifest_path(&self.project_root),
                module,
            )?,
            (None, None) => {
                return Err(ToolpinError::ConfigValidationError {
                    message: "either --version or --from-manifest is required".to_string(),
                })
            }
        };

        Ok(match &self.args.dest {
            Some(dest) => spec.with_destination(self.project_root.join(dest)),
            None => spec,
        })
    }

    /// Run with a specific command runner.
    pub fn run<R: CommandRunner>(
        &self,
        runner: R,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let spec = self.spec()?;
        let installer = ToolInstaller::new(runner, self.config.clone());
        let path = installer.ensure(&spec, ui)?;
        ui.output(&path.display().to_string());
        Ok(CommandResult::success())
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(SystemRunner, ui)
    }
}
