//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// toolpin - Pin and install Go command-line tools from build scripts.
#[derive(Debug, Parser)]
#[command(name = "toolpin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true, env = "TOOLPIN_PROJECT")]
    pub project: Option<PathBuf>,

    /// Path to the manifest, relative to the project root (overrides config)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Stream the package manager's output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print results only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the version a module is pinned to in the manifest
    Version(VersionArgs),

    /// Install a tool unless it is already available
    Install(InstallArgs),
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Args)]
pub struct VersionArgs {
    /// Module path as written in the manifest
    pub module: String,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// Command name the tool provides
    pub command: String,

    /// Installable package reference
    pub package: String,

    /// Exact version to install
    #[arg(long, conflicts_with = "from_manifest", required_unless_present = "from_manifest")]
    pub version: Option<String>,

    /// Use the version this module is pinned to in the manifest
    #[arg(long, value_name = "MODULE")]
    pub from_manifest: Option<String>,

    /// Install into this directory instead of using PATH
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_command() {
        let cli = Cli::parse_from(["toolpin", "version", "github.com/a-h/templ"]);
        match cli.command {
            Commands::Version(args) => assert_eq!(args.module, "github.com/a-h/templ"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_install_with_version() {
        let cli = Cli::parse_from([
            "toolpin",
            "install",
            "templ",
            "github.com/a-h/templ/cmd/templ",
            "--version",
            "v0.2.543",
            "--dest",
            "bin",
        ]);
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.command, "templ");
                assert_eq!(args.version.as_deref(), Some("v0.2.543"));
                assert_eq!(args.dest, Some(PathBuf::from("bin")));
                assert!(args.from_manifest.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn install_requires_a_version_source() {
        let result = Cli::try_parse_from(["toolpin", "install", "templ", "pkg"]);
        assert!(result.is_err());
    }

    #[test]
    fn install_rejects_both_version_sources() {
        let result = Cli::try_parse_from([
            "toolpin",
            "install",
            "templ",
            "pkg",
            "--version",
            "v1.0.0",
            "--from-manifest",
            "mod",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["toolpin", "version", "mod", "--quiet", "-m", "tools/go.mod"]);
        assert!(cli.quiet);
        assert_eq!(cli.manifest, Some(PathBuf::from("tools/go.mod")));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["toolpin", "-v", "-q", "version", "mod"]).is_err());
    }
}
