//! Verbose statistics printed ahead of the glyph line.

use std::{fmt, num::NonZeroUsize};

use crate::series::NumericSeries;

/// Number of values listed by default before the listing is truncated.
pub const DEFAULT_SUMMARY_LIMIT: usize = 15;

/// Marker appended to a truncated value listing.
pub const TRUNCATION_MARKER: char = '…';

/// Count, extremes, and a possibly truncated listing of a series.
///
/// The [`fmt::Display`] form spans four lines (`count`, `min`, `max`,
/// `values`) with numbers printed to one fractional digit.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use sparkline_core::{NumericSeries, Summary};
///
/// let series = NumericSeries::from_values(vec![1.0, 5.0, 22.0]);
/// let limit = NonZeroUsize::new(2).expect("non-zero");
/// let summary = Summary::from_series(&series, limit);
/// assert!(summary.is_truncated());
/// assert_eq!(
///     summary.to_string(),
///     "count: 3\nmin: 1.0\nmax: 22.0\nvalues: 1.0, 5.0, …",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    count: usize,
    min: Option<f64>,
    max: Option<f64>,
    listed: Vec<f64>,
    truncated: bool,
}

impl Summary {
    /// Summarises `series`, listing at most `limit` values.
    #[must_use]
    pub fn from_series(series: &NumericSeries, limit: NonZeroUsize) -> Self {
        let values = series.values();
        let listed = values.iter().take(limit.get()).copied().collect();
        Self {
            count: values.len(),
            min: series.min(),
            max: series.max(),
            listed,
            truncated: values.len() > limit.get(),
        }
    }

    /// Total number of values in the series.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Smallest value, `None` for an empty series.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest value, `None` for an empty series.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Values included in the listing.
    #[must_use]
    pub fn listed(&self) -> &[f64] {
        &self.listed
    }

    /// Whether values were left out of the listing.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

struct Extreme(Option<f64>);

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.1}"),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count: {}", self.count)?;
        writeln!(f, "min: {}", Extreme(self.min))?;
        writeln!(f, "max: {}", Extreme(self.max))?;
        f.write_str("values:")?;
        let mut separator = " ";
        for value in &self.listed {
            write!(f, "{separator}{value:.1}")?;
            separator = ", ";
        }
        if self.truncated {
            write!(f, "{separator}{TRUNCATION_MARKER}")?;
        }
        Ok(())
    }
}
