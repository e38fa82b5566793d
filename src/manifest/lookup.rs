//! Pinned-version lookup against a manifest on disk.

use std::fs;
use std::path::Path;

use crate::error::{Result, ToolpinError};

use super::parser::parse;

/// Conventional manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "go.mod";

/// Look up the pinned version of `dependency` in `./go.mod`.
///
/// See [`module_version_in`] for the return contract.
pub fn module_version(dependency: &str) -> Result<Option<String>> {
    module_version_in(Path::new(DEFAULT_MANIFEST), dependency)
}

/// Look up the pinned version of `dependency` in the manifest at `path`.
///
/// The file is re-read and re-parsed on every call.
///
/// - `Ok(None)` if the manifest cannot be read at all. A missing file and an
///   unreadable one are not distinguished.
/// - `Err(ManifestParse)` if the manifest is malformed.
/// - `Err(DependencyNotFound)` if no required module has exactly this path.
pub fn module_version_in(path: &Path, dependency: &str) -> Result<Option<String>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                tracing::debug!("No manifest at {}", path.display());
            } else {
                tracing::warn!(
                    "Manifest {} is unreadable ({}); treating as absent",
                    path.display(),
                    e
                );
            }
            return Ok(None);
        }
    };

    let manifest = parse(&path.display().to_string(), &data)?;

    match manifest.version_of(dependency) {
        Some(version) => {
            tracing::debug!("{} pinned at {} in {}", dependency, version, path.display());
            Ok(Some(version.to_string()))
        }
        None => Err(ToolpinError::DependencyNotFound {
            dependency: dependency.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join("go.mod");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn finds_pinned_version() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            "module example.com/app\n\nrequire example.com/tool v1.2.3\n",
        );

        let version = module_version_in(&path, "example.com/tool").unwrap();
        assert_eq!(version.as_deref(), Some("v1.2.3"));
    }

    #[test]
    fn missing_dependency_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, "require example.com/tool v1.2.3\n");

        let err = module_version_in(&path, "example.com/missing").unwrap_err();
        match err {
            ToolpinError::DependencyNotFound { dependency } => {
                assert_eq!(dependency, "example.com/missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_manifest_is_soft_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("go.mod");

        let version = module_version_in(&path, "example.com/tool").unwrap();
        assert!(version.is_none());
    }

    #[test]
    fn directory_in_place_of_manifest_is_soft_failure() {
        let temp = TempDir::new().unwrap();

        let version = module_version_in(temp.path(), "example.com/tool").unwrap();
        assert!(version.is_none());
    }

    #[test]
    fn malformed_manifest_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, "require (\n\texample.com/tool v1.2.3\n");

        let err = module_version_in(&path, "example.com/tool").unwrap_err();
        assert!(matches!(err, ToolpinError::ManifestParse { .. }));
    }

    #[test]
    fn loose_go_and_toolchain_lines_still_resolve() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            "module example.com/app\ngo 1.21.x\ntoolchain go1.22.4 extra\nrequire example.com/tool v1.2.3\n",
        );

        let version = module_version_in(&path, "example.com/tool").unwrap();
        assert_eq!(version.as_deref(), Some("v1.2.3"));
    }

    #[test]
    fn picks_up_changes_between_calls() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, "require example.com/tool v1.0.0\n");
        assert_eq!(
            module_version_in(&path, "example.com/tool").unwrap().as_deref(),
            Some("v1.0.0")
        );

        fs::write(&path, "require example.com/tool v1.1.0\n").unwrap();
        assert_eq!(
            module_version_in(&path, "example.com/tool").unwrap().as_deref(),
            Some("v1.1.0")
        );
    }
}
