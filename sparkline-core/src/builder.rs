//! Builder utilities for configuring sparkline rendering.
//!
//! Validates the configuration before constructing [`Sparkline`] instances.

use std::num::NonZeroUsize;

use crate::{
    Result, error::SparklineError, series::ParsePolicy, sparkline::Sparkline,
    summary::DEFAULT_SUMMARY_LIMIT,
};

/// Configures and constructs [`Sparkline`] instances.
///
/// # Examples
/// ```
/// use sparkline_core::{ParsePolicy, SparklineBuilder};
///
/// let sparkline = SparklineBuilder::new()
///     .with_parse_policy(ParsePolicy::Zero)
///     .with_summary_limit(10)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(sparkline.parse_policy(), ParsePolicy::Zero);
/// assert_eq!(sparkline.summary_limit().get(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct SparklineBuilder {
    parse_policy: ParsePolicy,
    summary_limit: usize,
}

impl Default for SparklineBuilder {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::default(),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
        }
    }
}

impl SparklineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use sparkline_core::{ParsePolicy, SparklineBuilder};
    ///
    /// let builder = SparklineBuilder::new();
    /// assert_eq!(builder.parse_policy(), ParsePolicy::Skip);
    /// assert_eq!(builder.summary_limit(), 15);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how malformed tokens are handled.
    #[must_use]
    pub const fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.parse_policy = policy;
        self
    }

    /// Returns the configured parse policy.
    #[must_use]
    pub const fn parse_policy(&self) -> ParsePolicy {
        self.parse_policy
    }

    /// Overrides how many values the verbose summary lists before truncating.
    #[must_use]
    pub const fn with_summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    /// Returns the configured summary limit.
    #[must_use]
    pub const fn summary_limit(&self) -> usize {
        self.summary_limit
    }

    /// Validates the configuration and constructs a [`Sparkline`] instance.
    ///
    /// # Errors
    /// Returns [`SparklineError::InvalidSummaryLimit`] when the summary limit
    /// is zero.
    ///
    /// # Examples
    /// ```
    /// use sparkline_core::{SparklineBuilder, SparklineError};
    ///
    /// let err = SparklineBuilder::new()
    ///     .with_summary_limit(0)
    ///     .build()
    ///     .expect_err("zero limit is rejected");
    /// assert_eq!(err, SparklineError::InvalidSummaryLimit { got: 0 });
    /// ```
    pub fn build(self) -> Result<Sparkline> {
        let summary_limit =
            NonZeroUsize::new(self.summary_limit).ok_or(SparklineError::InvalidSummaryLimit {
                got: self.summary_limit,
            })?;
        Ok(Sparkline::new(self.parse_policy, summary_limit))
    }
}
