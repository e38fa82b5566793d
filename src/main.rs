//! toolpin CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use toolpin::cli::{Cli, CommandDispatcher};
use toolpin::config::{load_config, ToolpinConfig};
use toolpin::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolpin=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolpin=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Apply global CLI flags on top of file and environment config.
fn apply_cli_overrides(mut config: ToolpinConfig, cli: &Cli) -> ToolpinConfig {
    if let Some(manifest) = &cli.manifest {
        config.manifest = manifest.clone();
    }
    if cli.verbose {
        config.output = OutputMode::Verbose;
    } else if cli.quiet {
        config.output = OutputMode::Quiet;
    }
    config
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolpin starting with args: {:?}", cli);

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let config = match load_config(&project_root) {
        Ok(config) => apply_cli_overrides(config, &cli),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut ui = TerminalUI::new(config.output);
    let dispatcher = CommandDispatcher::new(project_root, config);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_status()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
