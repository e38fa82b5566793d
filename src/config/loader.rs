//! Configuration file discovery, loading and environment overrides.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. Project config (`.toolpin.yml` in the project root)
//! 3. `TOOLPIN_*` environment variables

use crate::config::schema::ToolpinConfig;
use crate::error::{Result, ToolpinError};
use crate::ui::OutputMode;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const CONFIG_FILE: &str = ".toolpin.yml";

/// Overrides `package_manager`.
pub const ENV_PACKAGE_MANAGER: &str = "TOOLPIN_PACKAGE_MANAGER";
/// Overrides `destination_env`.
pub const ENV_DESTINATION_ENV: &str = "TOOLPIN_DESTINATION_ENV";
/// Overrides `manifest`.
pub const ENV_MANIFEST: &str = "TOOLPIN_MANIFEST";
/// Overrides `output`.
pub const ENV_OUTPUT: &str = "TOOLPIN_OUTPUT";

/// Find the project config in `project_root`, if present.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into ToolpinConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ToolpinConfig> {
    if content.trim().is_empty() {
        return Ok(ToolpinConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ToolpinError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ToolpinConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&content, path)
}

/// Load config for a project using the real process environment.
pub fn load_config(project_root: &Path) -> Result<ToolpinConfig> {
    load_config_with_env(project_root, |key: &str| std::env::var(key))
}

/// Load config with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn load_config_with_env<F>(project_root: &Path, env_fn: F) -> Result<ToolpinConfig>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut config = match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => ToolpinConfig::default(),
    };

    apply_env_overrides(&mut config, &env_fn)?;
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut ToolpinConfig, env_fn: &F) -> Result<()>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let non_empty = |key: &str| env_fn(key).ok().filter(|v| !v.is_empty());

    if let Some(value) = non_empty(ENV_PACKAGE_MANAGER) {
        config.package_manager = value;
    }
    if let Some(value) = non_empty(ENV_DESTINATION_ENV) {
        config.destination_env = value;
    }
    if let Some(value) = non_empty(ENV_MANIFEST) {
        config.manifest = PathBuf::from(value);
    }
    if let Some(value) = non_empty(ENV_OUTPUT) {
        config.output = value
            .parse::<OutputMode>()
            .map_err(|message| ToolpinError::ConfigValidationError {
                message: format!("{}: {}", ENV_OUTPUT, message),
            })?;
    }
    Ok(())
}
