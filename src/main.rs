//! tpudiepie CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tpudiepie::cli::{Cli, CommandDispatcher};
use tpudiepie::config::load_config;
use tpudiepie::runner::SystemClock;
use tpudiepie::shell::{is_ci, ShellExecutor};
use tpudiepie::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` or `--verbose` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tpudiepie=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tpudiepie=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug || cli.verbose);

    tracing::debug!("tpudiepie starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = !is_ci() && console::user_attended();
    let mut ui = create_ui(is_interactive, output_mode);

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    if let Some(project) = &cli.project {
        config.project = Some(project.clone());
    }

    let executor = ShellExecutor;
    let clock = SystemClock;
    let dispatcher = CommandDispatcher::new(&config, &executor, &clock);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
