//! Argument parsing, token collection, and output for the sparkline CLI.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use sparkline_core::{
    DEFAULT_SUMMARY_LIMIT, ParsePolicy, Rendering, SparklineBuilder, SparklineError,
};
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

/// Exit status reported when no usable input is given or help is requested.
pub const EXIT_USAGE: u8 = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sparkline",
    version,
    about = "Draw a list of numbers as a one-line chart of block glyphs.",
    after_help = "When no NUMBER is given, numbers are read from standard input: \
                  a single line is split on spaces, otherwise each line is one number."
)]
pub struct Cli {
    /// Numbers to draw, in order. Options must come before the first number.
    #[arg(value_name = "NUMBER", num_args = 1.., allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Print count, min, max, and the values before the chart.
    #[arg(short, long)]
    pub verbose: bool,

    /// How to treat tokens that are not numbers.
    #[arg(long = "on-invalid", value_enum, default_value_t = InvalidToken::Skip)]
    pub on_invalid: InvalidToken,

    /// Number of values listed by `--verbose` before the listing is cut short.
    #[arg(
        long = "summary-limit",
        default_value_t = DEFAULT_SUMMARY_LIMIT,
        value_parser = clap::value_parser!(usize),
    )]
    pub summary_limit: usize,
}

/// Treatment of tokens that are not numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InvalidToken {
    /// Leave the token out of the chart.
    Skip,
    /// Draw the token as zero.
    Zero,
}

impl From<InvalidToken> for ParsePolicy {
    fn from(value: InvalidToken) -> Self {
        match value {
            InvalidToken::Skip => Self::Skip,
            InvalidToken::Zero => Self::Zero,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither arguments nor standard input supplied any token.
    #[error("no numeric input supplied")]
    NoInput,
    /// Reading standard input failed.
    #[error("failed to read standard input: {source}")]
    Stdin {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Core rendering failed.
    #[error(transparent)]
    Core(#[from] SparklineError),
}

impl CliError {
    /// Returns `true` when the failure means the user gave nothing to draw.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        match self {
            Self::NoInput => true,
            Self::Core(core) => core.is_no_input(),
            Self::Stdin { .. } => false,
        }
    }

    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_usage() { EXIT_USAGE } else { 1 }
    }
}

/// Outcome of a CLI invocation, ready to be written out.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Whether the verbose summary precedes the chart.
    pub verbose: bool,
    /// Parsed series, buckets, and glyph line.
    pub rendering: Rendering,
}

/// Executes the CLI command represented by `cli`.
///
/// Positional values take precedence; `stdin` is consulted only when none
/// were given, and may be `None` when standard input is a terminal.
///
/// # Errors
/// Returns [`CliError::NoInput`] when no token was supplied,
/// [`CliError::Stdin`] when standard input cannot be read, and
/// [`CliError::Core`] when configuration is invalid or no token is a number.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use clap::Parser;
/// # use sparkline_cli::cli::{Cli, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli::try_parse_from(["sparkline"])?;
/// let summary = run_cli(cli, Some(Cursor::new("1 5 22 13 53\n")))?;
/// assert_eq!(summary.rendering.line(), "▁▁▃▂█");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    skip(cli, stdin),
    fields(source = field::Empty, verbose = cli.verbose),
)]
pub fn run_cli<R: BufRead>(cli: Cli, stdin: Option<R>) -> Result<ExecutionSummary, CliError> {
    let Cli {
        values,
        verbose,
        on_invalid,
        summary_limit,
    } = cli;

    let sparkline = SparklineBuilder::new()
        .with_parse_policy(on_invalid.into())
        .with_summary_limit(summary_limit)
        .build()?;

    let span = Span::current();
    let tokens = if !values.is_empty() {
        span.record("source", field::display("args"));
        values
    } else if let Some(reader) = stdin {
        span.record("source", field::display("stdin"));
        read_tokens(reader)?
    } else {
        Vec::new()
    };
    if tokens.is_empty() {
        return Err(CliError::NoInput);
    }

    let rendering = sparkline.render(&tokens)?;
    Ok(ExecutionSummary { verbose, rendering })
}

/// Splits `reader` into tokens: a lone line is split on single spaces,
/// otherwise every line is one token.
pub(super) fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    let mut lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CliError::Stdin { source })?;
    debug!(lines = lines.len(), "read standard input");
    if lines.len() == 1 {
        let line = lines.remove(0);
        return Ok(line.split(' ').map(ToOwned::to_owned).collect());
    }
    Ok(lines)
}

/// Writes `summary` to `writer`: the verbose summary, if requested, then the
/// glyph line terminated by a single newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sparkline_cli::cli::{ExecutionSummary, render_output};
/// # use sparkline_core::SparklineBuilder;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let rendering = SparklineBuilder::new().build()?.render(&["0", "0", "0"])?;
/// let summary = ExecutionSummary { verbose: false, rendering };
/// let mut buffer = Vec::new();
/// render_output(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "▁▁▁\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if summary.verbose {
        writeln!(writer, "{}", summary.rendering.summary())?;
    }
    writeln!(writer, "{}", summary.rendering.line())
}
