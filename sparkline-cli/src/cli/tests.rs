//! Unit tests for argument parsing, token collection, and output.

use super::commands::read_tokens;
use super::test_helpers::{output_of, parse, run_cli_expecting_error};
use super::{Cli, CliError, EXIT_USAGE, InvalidToken, run_cli};

use std::io::{self, BufReader, Cursor, Read};

use clap::{Parser, error::ErrorKind};
use rstest::rstest;
use sparkline_core::SparklineError;
use tracing::Level;

use sparkline_test_support::tracing::capture_events;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn no_stdin() -> Option<Cursor<&'static str>> {
    None
}

#[rstest]
fn parse_applies_defaults() {
    let cli = parse(&["1", "2"]);
    assert_eq!(cli.values, ["1", "2"]);
    assert!(!cli.verbose);
    assert_eq!(cli.on_invalid, InvalidToken::Skip);
    assert_eq!(cli.summary_limit, 15);
}

#[rstest]
fn parse_reads_flags() {
    let cli = parse(&["-v", "--on-invalid", "zero", "--summary-limit", "4", "3"]);
    assert!(cli.verbose);
    assert_eq!(cli.on_invalid, InvalidToken::Zero);
    assert_eq!(cli.summary_limit, 4);
    assert_eq!(cli.values, ["3"]);
}

#[rstest]
fn parse_accepts_negative_numbers() {
    let cli = parse(&["-3", "4", "-0.5", "-.5", "-1e3"]);
    assert_eq!(cli.values, ["-3", "4", "-0.5", "-.5", "-1e3"]);
}

#[rstest]
fn parse_keeps_flags_before_hyphenated_values() {
    let cli = parse(&["-v", "-.5", "2"]);
    assert!(cli.verbose);
    assert_eq!(cli.values, ["-.5", "2"]);
}

#[rstest]
fn run_draws_hyphenated_fraction_from_arguments() -> TestResult {
    let summary = run_cli(parse(&["-.5", "2"]), no_stdin())?;
    assert_eq!(summary.rendering.series().values(), &[-0.5, 2.0]);
    assert_eq!(output_of(&summary), "▁█\n");
    Ok(())
}

#[rstest]
fn clap_rejects_unknown_policy() {
    let result = Cli::try_parse_from(["sparkline", "--on-invalid", "panic", "1"]);
    assert!(result.is_err());
}

#[rstest]
#[case::long("--help")]
#[case::short("-h")]
fn clap_reports_help_requests(#[case] flag: &str) {
    let err = Cli::try_parse_from(["sparkline", flag]).expect_err("help short-circuits parsing");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[rstest]
fn run_draws_reference_row() -> TestResult {
    let summary = run_cli(parse(&["1", "5", "22", "13", "53"]), no_stdin())?;
    let buckets: Vec<u8> = summary
        .rendering
        .buckets()
        .iter()
        .map(|bucket| bucket.get())
        .collect();
    assert_eq!(buckets, [0, 0, 2, 1, 7]);
    assert_eq!(output_of(&summary), "▁▁▃▂█\n");
    Ok(())
}

#[rstest]
fn run_draws_all_zero_row_at_floor() -> TestResult {
    let summary = run_cli(parse(&["0", "0", "0"]), no_stdin())?;
    assert_eq!(output_of(&summary), "▁▁▁\n");
    Ok(())
}

#[rstest]
fn verbose_output_precedes_chart() -> TestResult {
    let summary = run_cli(parse(&["-v", "1", "5", "22", "13", "53"]), no_stdin())?;
    assert_eq!(
        output_of(&summary),
        "count: 5\nmin: 1.0\nmax: 53.0\nvalues: 1.0, 5.0, 22.0, 13.0, 53.0\n▁▁▃▂█\n"
    );
    Ok(())
}

#[rstest]
fn verbose_output_truncates_after_fifteen_values() -> TestResult {
    let mut args = vec!["--verbose"];
    let values: Vec<String> = (1..=20).map(|value| value.to_string()).collect();
    args.extend(values.iter().map(String::as_str));
    let summary = run_cli(parse(&args), no_stdin())?;
    let output = output_of(&summary);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.first().copied(), Some("count: 20"));
    let listing = lines.get(3).copied().unwrap_or_default();
    assert!(listing.starts_with("values: 1.0, 2.0,"));
    assert!(listing.ends_with("14.0, 15.0, …"));
    assert!(!listing.contains("16.0"));
    assert_eq!(lines.get(4).map(|line| line.chars().count()), Some(20));
    Ok(())
}

#[rstest]
#[case::single_line("1 5 22 13 53\n", vec!["1", "5", "22", "13", "53"])]
#[case::single_line_without_newline("4 2", vec!["4", "2"])]
#[case::double_space("1  2", vec!["1", "", "2"])]
#[case::one_per_line("1\n5\n22\n", vec!["1", "5", "22"])]
#[case::lines_keep_inner_spaces("1 2\n3\n", vec!["1 2", "3"])]
#[case::empty("", vec![])]
fn read_tokens_splits_stdin(#[case] input: &str, #[case] expected: Vec<&str>) -> TestResult {
    let tokens = read_tokens(Cursor::new(input))?;
    assert_eq!(tokens, expected);
    Ok(())
}

#[rstest]
fn run_reads_stdin_when_no_values_given() -> TestResult {
    let summary = run_cli(parse(&[]), Some(Cursor::new("0 7\n")))?;
    assert_eq!(output_of(&summary), "▁█\n");
    Ok(())
}

#[rstest]
fn run_prefers_values_over_stdin() -> TestResult {
    let summary = run_cli(parse(&["7", "0"]), Some(Cursor::new("0 7\n")))?;
    assert_eq!(output_of(&summary), "█▁\n");
    Ok(())
}

#[rstest]
fn zero_policy_draws_blank_tokens_as_zero() -> TestResult {
    let summary = run_cli(
        parse(&["--on-invalid", "zero"]),
        Some(Cursor::new("1  2\n")),
    )?;
    assert_eq!(output_of(&summary), "▄▁█\n");
    Ok(())
}

#[rstest]
fn skip_policy_logs_dropped_tokens() -> TestResult {
    let (result, capture) = capture_events(|| run_cli(parse(&["2", "two", "4"]), no_stdin()));
    let summary = result?;
    assert_eq!(output_of(&summary), "▄█\n");
    let warnings = capture.matching(Level::WARN, "malformed numeric token");
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings.first().and_then(|event| event.field("token")),
        Some("two")
    );
    Ok(())
}

#[rstest]
#[case::no_stdin(None)]
#[case::empty_stdin(Some(""))]
fn run_without_tokens_is_usage_error(#[case] stdin: Option<&'static str>) {
    let err = run_cli_expecting_error(parse(&[]), stdin, "empty input must fail");
    assert!(matches!(err, CliError::NoInput));
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[rstest]
fn run_with_only_malformed_tokens_is_usage_error() {
    let err = run_cli_expecting_error(parse(&["a", "b"]), None, "no numbers must fail");
    assert!(matches!(
        err,
        CliError::Core(SparklineError::EmptySeries { tokens: 2 })
    ));
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[rstest]
fn run_rejects_zero_summary_limit() {
    let err = run_cli_expecting_error(
        parse(&["--summary-limit", "0", "1"]),
        None,
        "zero summary limit must fail",
    );
    assert!(matches!(
        err,
        CliError::Core(SparklineError::InvalidSummaryLimit { got: 0 })
    ));
    assert!(!err.is_usage());
    assert_eq!(err.exit_code(), 1);
}

struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

#[rstest]
fn run_surfaces_stdin_failures() {
    let err = match run_cli(parse(&[]), Some(BufReader::new(BrokenPipe))) {
        Ok(_) => panic!("broken stdin must fail"),
        Err(err) => err,
    };
    assert!(matches!(err, CliError::Stdin { .. }));
    assert_eq!(err.exit_code(), 1);
}
