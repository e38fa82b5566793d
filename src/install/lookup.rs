//! Executable search-path resolution.
//!
//! Resolution walks the search path directly rather than asking `which`,
//! whose behavior differs across systems and is sometimes a shell builtin.

use std::path::{Path, PathBuf};

/// Where to look for commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPath {
    /// The live `PATH` of this process, re-read on every resolution.
    #[default]
    System,
    /// A fixed list of directories.
    Fixed(Vec<PathBuf>),
}

impl SearchPath {
    /// Directories to search, in order.
    pub fn entries(&self) -> Vec<PathBuf> {
        match self {
            SearchPath::System => parse_system_path(),
            SearchPath::Fixed(dirs) => dirs.clone(),
        }
    }

    /// Resolve `command` against this search path.
    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        resolve_command(command, &self.entries())
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a command name to an executable file.
///
/// A name containing a path separator is checked as-is and never searched
/// for. Otherwise the first directory holding an executable regular file
/// named `command` (or `command` plus the platform executable suffix) wins.
/// Empty entries are skipped rather than treated as the working directory.
pub fn resolve_command(command: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if command.is_empty() {
        return None;
    }

    if command.contains('/') || command.contains(std::path::MAIN_SEPARATOR) {
        let candidate = PathBuf::from(command);
        return is_runnable(&candidate).then_some(candidate);
    }

    for dir in path_entries {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for name in candidate_names(command) {
            let candidate = dir.join(&name);
            if is_runnable(&candidate) {
                tracing::debug!("Resolved {} to {}", command, candidate.display());
                return Some(candidate);
            }
        }
    }

    tracing::debug!("{} not found on search path", command);
    None
}

fn is_runnable(path: &Path) -> bool {
    path.is_file() && is_executable(path)
}

pub(crate) fn candidate_names(command: &str) -> Vec<String> {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || command.ends_with(suffix) {
        vec![command.to_string()]
    } else {
        vec![command.to_string(), format!("{}{}", command, suffix)]
    }
}
