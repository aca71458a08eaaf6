//! Small helpers shared across CLI tests.

use std::io::Cursor;

use clap::Parser;

use super::{Cli, CliError, ExecutionSummary, render_output, run_cli};

pub(super) fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("sparkline").chain(args.iter().copied());
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments must parse: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(
    cli: Cli,
    stdin: Option<&'static str>,
    panic_msg: &str,
) -> CliError {
    match run_cli(cli, stdin.map(Cursor::new)) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn output_of(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_output(summary, &mut buffer) {
        panic!("writing to a buffer cannot fail: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("output must be UTF-8: {err}"),
    }
}
