//! Conditional installation of command-line tools.
//!
//! # Modules
//!
//! - [`installer`] - [`ToolInstaller`] and [`ToolSpec`]
//! - [`lookup`] - Search-path resolution
//!
//! The free functions here are shortcuts for build scripts: they use the
//! real `PATH`, spawn real processes, load config for the current
//! directory and print progress to stdout.
//!
//! # Example
//!
//! ```no_run
//! use toolpin::install::maybe_install_tool;
//!
//! let templ = maybe_install_tool("templ", "github.com/a-h/templ/cmd/templ", "v0.2.543")?;
//! println!("templ is at {}", templ.display());
//! # Ok::<(), toolpin::ToolpinError>(())
//! ```

pub mod installer;
pub mod lookup;

pub use installer::{ToolInstaller, ToolSpec};
pub use lookup::{resolve_command, SearchPath};

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::shell::SystemRunner;
use crate::ui::TerminalUI;

fn system_installer() -> Result<(ToolInstaller<SystemRunner>, TerminalUI)> {
    let config = load_config(Path::new("."))?;
    let ui = TerminalUI::new(config.output);
    Ok((ToolInstaller::new(SystemRunner, config), ui))
}

/// Find `command` on `PATH`, installing `package@version` if it is missing.
pub fn maybe_install_tool(command: &str, package: &str, version: &str) -> Result<PathBuf> {
    let (installer, mut ui) = system_installer()?;
    installer.maybe_install_tool(&ToolSpec::new(command, package, version), &mut ui)
}

/// Find `command` in `destination`, installing `package@version` there if it
/// is missing.
pub fn maybe_install_tool_to(
    command: &str,
    package: &str,
    version: &str,
    destination: &Path,
) -> Result<PathBuf> {
    let (installer, mut ui) = system_installer()?;
    installer.maybe_install_tool_to(
        &ToolSpec::new(command, package, version),
        destination,
        &mut ui,
    )
}
