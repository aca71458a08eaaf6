//! Token parsing and the numeric series it produces.
//!
//! Tokens are parsed as base-10 floating-point literals. Malformed tokens are
//! handled according to a [`ParsePolicy`] chosen by the caller; the default
//! drops them while keeping the relative order of every other value.

use tracing::warn;

/// How the parser treats tokens that are not finite base-10 numbers.
///
/// # Examples
/// ```
/// use sparkline_core::ParsePolicy;
///
/// assert_eq!(ParsePolicy::default(), ParsePolicy::Skip);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParsePolicy {
    /// Drop malformed tokens from the series.
    #[default]
    Skip,
    /// Substitute `0.0` for each malformed token.
    Zero,
}

/// Ordered sequence of finite values derived from the input tokens.
///
/// # Examples
/// ```
/// use sparkline_core::NumericSeries;
///
/// let series = NumericSeries::from_values(vec![3.0, -1.0, 8.5]);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.min(), Some(-1.0));
/// assert_eq!(series.max(), Some(8.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSeries {
    values: Vec<f64>,
}

impl NumericSeries {
    /// Wraps already-parsed values, preserving their order.
    #[must_use]
    pub const fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the values in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the series holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the largest value, or `None` for an empty series.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Returns the smallest value, or `None` for an empty series.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }
}

/// Parses `tokens` into a [`NumericSeries`] according to `policy`.
///
/// Surrounding whitespace is ignored. Tokens that fail to parse, or that
/// parse to a non-finite value such as `inf` or `NaN`, are malformed; each
/// one is reported through a `warn` event.
///
/// # Examples
/// ```
/// use sparkline_core::{ParsePolicy, parse_tokens};
///
/// let skipped = parse_tokens(["1", "x", "2.5"], ParsePolicy::Skip);
/// assert_eq!(skipped.values(), &[1.0, 2.5]);
///
/// let zeroed = parse_tokens(["1", "x", "2.5"], ParsePolicy::Zero);
/// assert_eq!(zeroed.values(), &[1.0, 0.0, 2.5]);
/// ```
pub fn parse_tokens<I, S>(tokens: I, policy: ParsePolicy) -> NumericSeries
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values = tokens
        .into_iter()
        .enumerate()
        .filter_map(|(position, token)| {
            let raw = token.as_ref();
            parse_token(raw).or_else(|| {
                warn!(token = raw, position, policy = ?policy, "malformed numeric token");
                match policy {
                    ParsePolicy::Skip => None,
                    ParsePolicy::Zero => Some(0.0),
                }
            })
        })
        .collect();
    NumericSeries::from_values(values)
}

fn parse_token(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
