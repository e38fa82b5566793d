//! Error types for toolpin operations.
//!
//! This module defines [`ToolpinError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Hard failures are returned to the caller immediately; nothing is retried
//!   and no install artifacts are cleaned up
//! - An unreadable manifest is not an error at all (see
//!   [`crate::manifest::module_version_in`])
//! - Use `anyhow::Error` (via `ToolpinError::Other`) for context-wrapped I/O
//!   failures that need no variant of their own

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolpin operations.
#[derive(Debug, Error)]
pub enum ToolpinError {
    /// Manifest file was read but is not valid in the lax grammar.
    #[error("{path}:{line}: {message}")]
    ManifestParse {
        path: String,
        line: usize,
        message: String,
    },

    /// The manifest does not require the requested module.
    #[error("Module path \"{dependency}\" not found in manifest")]
    DependencyNotFound { dependency: String },

    /// A version was to be read from the manifest, but no manifest was found.
    #[error("No pinned version for \"{module}\": manifest is missing or unreadable")]
    VersionUnavailable { module: String },

    /// Destination directory could not be made absolute.
    #[error("Error converting {} to absolute path: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected filesystem error while probing for a binary.
    #[error("Failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Package-manager install command failed.
    #[error("Failed to install {package}: {source}")]
    InstallFailed {
        package: String,
        #[source]
        source: Box<ToolpinError>,
    },

    /// Install reported success but the binary is still not visible.
    #[error("Installed '{command}' but it was not found {location}")]
    PostInstallNotFound { command: String, location: String },

    /// Shell command exited non-zero (or was killed by a signal).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Shell command could not be started at all.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolpin operations.
pub type Result<T> = std::result::Result<T, ToolpinError>;
