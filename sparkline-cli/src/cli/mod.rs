//! Command-line interface orchestration for the sparkline tool.
//!
//! Collects number tokens from the arguments or standard input, renders them
//! with `sparkline-core`, and writes the optional summary and the chart.

mod commands;

pub use commands::{
    Cli, CliError, EXIT_USAGE, ExecutionSummary, InvalidToken, render_output, run_cli,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
