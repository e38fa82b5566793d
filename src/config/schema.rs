//! Configuration schema.

use serde::Deserialize;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Installer and lookup settings.
///
/// Every field has a default, so an empty or partial config file is valid.
///
/// # Example
///
/// ```
/// use toolpin::config::ToolpinConfig;
///
/// let config: ToolpinConfig = serde_yaml::from_str("package_manager: go1.22.4").unwrap();
/// assert_eq!(config.package_manager, "go1.22.4");
/// assert_eq!(config.destination_env, "GOBIN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolpinConfig {
    /// Package manager executable.
    pub package_manager: String,

    /// Subcommand that installs a package (`<package_manager> <verb> pkg@ver`).
    pub install_verb: String,

    /// Environment variable that redirects installs to a destination directory.
    pub destination_env: String,

    /// Manifest path, relative to the project root unless absolute.
    pub manifest: PathBuf,

    /// Output verbosity.
    pub output: OutputMode,
}

impl Default for ToolpinConfig {
    fn default() -> Self {
        Self {
            package_manager: "go".to_string(),
            install_verb: "install".to_string(),
            destination_env: "GOBIN".to_string(),
            manifest: PathBuf::from(crate::manifest::DEFAULT_MANIFEST),
            output: OutputMode::Normal,
        }
    }
}

impl ToolpinConfig {
    /// Manifest location resolved against `project_root`.
    pub fn manifest_path(&self, project_root: &std::path::Path) -> PathBuf {
        project_root.join(&self.manifest)
    }
}
