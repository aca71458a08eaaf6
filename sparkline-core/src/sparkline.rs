//! Parse, quantize, and render pipeline.
//!
//! Provides the [`Sparkline`] entry point and the [`Rendering`] it produces.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    error::SparklineError,
    glyph::render_glyphs,
    quantize::{Bucket, quantize},
    series::{NumericSeries, ParsePolicy, parse_tokens},
    summary::Summary,
};

/// Entry point for turning tokens into a sparkline.
///
/// # Examples
/// ```
/// use sparkline_core::SparklineBuilder;
///
/// let sparkline = SparklineBuilder::new().build().expect("defaults are valid");
/// let rendering = sparkline
///     .render(&["1", "5", "22", "13", "53"])
///     .expect("tokens contain numbers");
/// assert_eq!(rendering.line(), "▁▁▃▂█");
/// ```
#[derive(Debug, Clone)]
pub struct Sparkline {
    parse_policy: ParsePolicy,
    summary_limit: NonZeroUsize,
}

impl Sparkline {
    pub(crate) const fn new(parse_policy: ParsePolicy, summary_limit: NonZeroUsize) -> Self {
        Self {
            parse_policy,
            summary_limit,
        }
    }

    /// Returns the policy applied to malformed tokens.
    #[must_use]
    pub const fn parse_policy(&self) -> ParsePolicy {
        self.parse_policy
    }

    /// Returns how many values the verbose summary lists.
    #[must_use]
    pub const fn summary_limit(&self) -> NonZeroUsize {
        self.summary_limit
    }

    /// Parses `tokens` and renders the resulting series.
    ///
    /// # Errors
    /// Returns [`SparklineError::EmptySeries`] when no token yields a usable
    /// value.
    #[instrument(
        name = "core.render",
        err(level = "debug"),
        skip(self, tokens),
        fields(tokens = tokens.len(), policy = ?self.parse_policy),
    )]
    pub fn render<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Rendering> {
        let series = parse_tokens(tokens, self.parse_policy);
        if series.is_empty() {
            return Err(SparklineError::EmptySeries {
                tokens: tokens.len(),
            });
        }
        let rendering = self.render_series(series);
        info!(values = rendering.series().len(), "rendered sparkline");
        Ok(rendering)
    }

    /// Renders an already-parsed series.
    ///
    /// An empty series renders as an empty line.
    ///
    /// # Examples
    /// ```
    /// use sparkline_core::{NumericSeries, SparklineBuilder};
    ///
    /// let sparkline = SparklineBuilder::new().build().expect("defaults are valid");
    /// let rendering = sparkline.render_series(NumericSeries::from_values(vec![0.0, 0.0, 0.0]));
    /// assert_eq!(rendering.line(), "▁▁▁");
    ///
    /// let empty = sparkline.render_series(NumericSeries::default());
    /// assert_eq!(empty.line(), "");
    /// ```
    #[must_use]
    pub fn render_series(&self, series: NumericSeries) -> Rendering {
        let buckets = quantize(&series);
        let line = render_glyphs(&buckets);
        Rendering {
            series,
            buckets,
            line,
            summary_limit: self.summary_limit,
        }
    }
}

/// Output of a single rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    series: NumericSeries,
    buckets: Vec<Bucket>,
    line: String,
    summary_limit: NonZeroUsize,
}

impl Rendering {
    /// The parsed series.
    #[must_use]
    pub const fn series(&self) -> &NumericSeries {
        &self.series
    }

    /// One bucket per value, in input order.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The glyph line, without a trailing newline.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Builds the verbose summary of the series.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_series(&self.series, self.summary_limit)
    }
}
