//! Conditional tool installation.
//!
//! A tool is installed only if it cannot already be found. The check is
//! either a search-path resolution or, in destination mode, a direct probe
//! of `<destination>/<command>`. There is no locking: two processes racing
//! on the same tool may both install it, and the last write wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ToolpinConfig;
use crate::error::{Result, ToolpinError};
use crate::manifest::module_version_in;
use crate::shell::{CommandRunner, Invocation};
use crate::ui::UserInterface;

use super::lookup::{candidate_names, SearchPath};

/// A tool to make available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Command name the tool installs (e.g., `templ`).
    pub command: String,
    /// Installable package reference (e.g., `github.com/a-h/templ/cmd/templ`).
    pub package: String,
    /// Exact version to install (e.g., `v0.2.543`).
    pub version: String,
    /// Install into this directory instead of relying on the search path.
    pub destination: Option<PathBuf>,
}

impl ToolSpec {
    /// Create a spec resolved against the search path.
    pub fn new(command: &str, package: &str, version: &str) -> Self {
        Self {
            command: command.to_string(),
            package: package.to_string(),
            version: version.to_string(),
            destination: None,
        }
    }

    /// Create a spec whose version is pinned by `module` in a manifest.
    ///
    /// Useful when a tool ships in the same module as a library the project
    /// imports, so the manifest stays the single source of truth for both.
    pub fn from_manifest(
        command: &str,
        package: &str,
        manifest: &Path,
        module: &str,
    ) -> Result<Self> {
        let version = module_version_in(manifest, module)?.ok_or_else(|| {
            ToolpinError::VersionUnavailable {
                module: module.to_string(),
            }
        })?;
        Ok(Self::new(command, package, &version))
    }

    /// Install into `destination` instead of relying on the search path.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// `package@version`, as passed to the package manager.
    pub fn package_ref(&self) -> String {
        format!("{}@{}", self.package, self.version)
    }
}

/// Installs tools through a [`CommandRunner`].
pub struct ToolInstaller<R: CommandRunner> {
    runner: R,
    config: ToolpinConfig,
    search_path: SearchPath,
}

impl<R: CommandRunner> ToolInstaller<R> {
    /// Create an installer using the live `PATH`.
    pub fn new(runner: R, config: ToolpinConfig) -> Self {
        Self {
            runner,
            config,
            search_path: SearchPath::System,
        }
    }

    /// Resolve commands against `search_path` instead of the live `PATH`.
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Get the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Make the tool available, dispatching on [`ToolSpec::destination`].
    pub fn ensure(&self, spec: &ToolSpec, ui: &mut dyn UserInterface) -> Result<PathBuf> {
        match &spec.destination {
            Some(destination) => self.maybe_install_tool_to(spec, destination, ui),
            None => self.maybe_install_tool(spec, ui),
        }
    }

    /// Return the command's path on the search path, installing it first if
    /// it is not there.
    pub fn maybe_install_tool(
        &self,
        spec: &ToolSpec,
        ui: &mut dyn UserInterface,
    ) -> Result<PathBuf> {
        if let Some(path) = self.search_path.resolve(&spec.command) {
            return Ok(path);
        }

        ui.begin(&format!("Installing {}@{}...", spec.command, spec.version));
        self.run_install(spec, &self.install_invocation(spec), ui, true)?;

        self.search_path
            .resolve(&spec.command)
            .ok_or_else(|| ToolpinError::PostInstallNotFound {
                command: spec.command.clone(),
                location: "on the search path".to_string(),
            })
    }

    /// Return `<destination>/<command>`, installing it there first if it
    /// does not exist.
    pub fn maybe_install_tool_to(
        &self,
        spec: &ToolSpec,
        destination: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<PathBuf> {
        let destination =
            std::path::absolute(destination).map_err(|source| ToolpinError::InvalidPath {
                path: destination.to_path_buf(),
                source,
            })?;

        if let Some(path) = probe_destination(&destination, &spec.command)? {
            return Ok(path);
        }

        ui.message(&format!(
            "Installing {}@{} to {}",
            spec.command,
            spec.version,
            destination.display()
        ));
        let invocation = self.install_invocation(spec).env(
            self.config.destination_env.as_str(),
            destination.as_os_str().to_os_string(),
        );
        self.run_install(spec, &invocation, ui, false)?;

        probe_destination(&destination, &spec.command)?.ok_or_else(|| {
            ToolpinError::PostInstallNotFound {
                command: spec.command.clone(),
                location: format!("in {}", destination.display()),
            }
        })
    }

    fn install_invocation(&self, spec: &ToolSpec) -> Invocation {
        Invocation::new(&self.config.package_manager)
            .arg(self.config.install_verb.as_str())
            .arg(spec.package_ref())
    }

    /// Run the install command. `inline` closes a progress line started
    /// with `begin`.
    fn run_install(
        &self,
        spec: &ToolSpec,
        invocation: &Invocation,
        ui: &mut dyn UserInterface,
        inline: bool,
    ) -> Result<()> {
        let outcome = if ui.output_mode().shows_command_output() {
            self.runner.run_verbose(invocation)
        } else {
            self.runner.run_silent(invocation)
        };

        let failure = match outcome {
            Ok(result) if result.success => {
                tracing::debug!("{} finished in {:?}", invocation, result.duration);
                if inline {
                    ui.finish("done");
                }
                return Ok(());
            }
            Ok(result) => {
                if inline {
                    ui.finish("failed");
                }
                for line in result.stderr.lines() {
                    ui.error(line);
                }
                ToolpinError::CommandFailed {
                    command: invocation.to_string(),
                    code: result.exit_code,
                }
            }
            Err(e) => {
                if inline {
                    ui.finish("failed");
                }
                e
            }
        };

        Err(ToolpinError::InstallFailed {
            package: spec.package_ref(),
            source: Box::new(failure),
        })
    }
}

/// Look for `command` in `destination`.
///
/// Only a not-found error counts as absent; anything else (e.g., permission
/// denied) is a hard `Stat` error.
fn probe_destination(destination: &Path, command: &str) -> Result<Option<PathBuf>> {
    for name in candidate_names(command) {
        let path = destination.join(name);
        match fs::metadata(&path) {
            Ok(_) => return Ok(Some(path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => return Err(ToolpinError::Stat { path, source }),
        }
    }
    Ok(None)
}
