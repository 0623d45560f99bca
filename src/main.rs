//! falco-validator CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use falco_validator::cli::{version_banner, Cli, RunCommand};
use falco_validator::ui::{ConsoleUI, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout carries only progress and falco output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("falco_validator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("falco_validator=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("falco-validator starting with args: {:?}", cli);

    if cli.version {
        println!("{}", version_banner());
        return ExitCode::SUCCESS;
    }

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = ConsoleUI::new(output_mode);

    match RunCommand::from_cli(&cli).execute(&mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
