//! CLI entry point for drawing sparklines.
//!
//! Parses command-line arguments with clap, renders the chart to stdout, and
//! maps errors to exit codes: `2` when there is nothing to draw or help was
//! requested, `1` for any other failure. Logging is initialised eagerly so
//! later stages can emit structured diagnostics via `tracing`.

use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, error::ErrorKind};

use sparkline_cli::{
    cli::{Cli, CliError, EXIT_USAGE, render_output, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Draw the chart for `cli` and flush the output stream.
fn try_main(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let input = (!stdin.is_terminal()).then(|| stdin.lock());
    let summary = run_cli(cli, input).context("failed to draw sparkline")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_output(&summary, &mut writer).context("failed to write sparkline")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    let Err(err) = try_main(cli) else {
        return ExitCode::SUCCESS;
    };

    let cli_error = err.downcast_ref::<CliError>();
    if let Some(cli_error) = cli_error.filter(|cli_error| cli_error.is_usage()) {
        let _ = Cli::command()
            .error(ErrorKind::MissingRequiredArgument, cli_error)
            .print();
        return ExitCode::from(cli_error.exit_code());
    }

    let code = cli_error.and_then(|cli_error| match cli_error {
        CliError::Core(core) => Some(core.code()),
        _ => None,
    });
    let message = format!("{err:#}");
    error!(
        error = %message,
        code = code.map(|code| field::display(code.as_str())),
        "command execution failed"
    );
    ExitCode::from(cli_error.map_or(1, CliError::exit_code))
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
