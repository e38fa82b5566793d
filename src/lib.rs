//! toolpin - Build-script helpers for Go command-line tools.
//!
//! toolpin reads a `go.mod` manifest to find the version a dependency is
//! pinned to, and installs a tool with `go install` only when it is not
//! already available, either on `PATH` or in a chosen directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`install`] - Conditional tool installation
//! - [`manifest`] - Manifest parsing and pinned-version lookup
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Progress output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use toolpin::install::maybe_install_tool_to;
//! use toolpin::manifest::module_version;
//!
//! // Keep the templ CLI at the same version as the templ library in go.mod.
//! if let Some(version) = module_version("github.com/a-h/templ")? {
//!     maybe_install_tool_to("templ", "github.com/a-h/templ/cmd/templ", &version, Path::new("bin"))?;
//! }
//! # Ok::<(), toolpin::ToolpinError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod manifest;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolpinError};
