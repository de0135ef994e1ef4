//! ffdeps CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use ffdeps::cli::{Cli, CommandDispatcher};
use ffdeps::config::find_source_tree;
use ffdeps::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN; progress goes through the UI, not the log
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ffdeps=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ffdeps=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("ffdeps starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Explicit flag (or FFDEPS_SOURCE_TREE), else the nearest directory with
    // an ffdeps.yml, else the current directory.
    let cwd = std::env::current_dir().unwrap_or_default();
    let source_tree = cli
        .source_tree
        .clone()
        .or_else(|| find_source_tree(&cwd))
        .unwrap_or(cwd);

    let mut ui = create_ui(true, output_mode);

    let dispatcher = CommandDispatcher::new(source_tree);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
