//! Mapping of numeric values onto discrete glyph buckets.
//!
//! Each value is normalised against the series maximum with
//! `floor(value * 7 / max)`. The raw formula is undefined for a zero maximum
//! and unbounded below for negative values, so every result is clamped into
//! `0..=7` and a non-positive maximum sends every value to bucket zero.

use tracing::debug;

use crate::{glyph::GLYPH_COUNT, series::NumericSeries};

/// Highest bucket index, one less than the glyph count.
const TOP: u8 = GLYPH_COUNT - 1;

/// Discretised magnitude level of a value, always within `0..=7`.
///
/// # Examples
/// ```
/// use sparkline_core::Bucket;
///
/// assert_eq!(Bucket::for_value(53.0, 53.0).get(), 7);
/// assert_eq!(Bucket::for_value(22.0, 53.0).get(), 2);
/// assert_eq!(Bucket::for_value(-4.0, 53.0).get(), 0);
/// assert_eq!(Bucket::for_value(0.0, 0.0).get(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bucket(u8);

impl Bucket {
    /// The lowest bucket.
    pub const LOWEST: Self = Self(0);
    /// The highest bucket, reserved for values equal to the maximum.
    pub const HIGHEST: Self = Self(TOP);

    /// Creates a bucket, saturating indices above the highest level.
    ///
    /// # Examples
    /// ```
    /// use sparkline_core::Bucket;
    ///
    /// assert_eq!(Bucket::new(3).get(), 3);
    /// assert_eq!(Bucket::new(200), Bucket::HIGHEST);
    /// ```
    #[must_use]
    pub const fn new(index: u8) -> Self {
        if index > TOP { Self(TOP) } else { Self(index) }
    }

    /// Returns the bucket index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Computes the bucket for `value` normalised against `max`.
    #[must_use]
    pub fn for_value(value: f64, max: f64) -> Self {
        if max.is_nan() || max <= 0.0 {
            return Self::LOWEST;
        }
        let top = f64::from(TOP);
        let scaled = (value * top / max).floor();
        if scaled.is_nan() {
            return Self::LOWEST;
        }
        // Clamped into 0..=7 so the cast cannot truncate.
        Self(scaled.clamp(0.0, top) as u8)
    }
}

/// Computes one [`Bucket`] per value of `series`, preserving order.
///
/// An empty series yields no buckets.
///
/// # Examples
/// ```
/// use sparkline_core::{NumericSeries, quantize};
///
/// let series = NumericSeries::from_values(vec![1.0, 5.0, 22.0, 13.0, 53.0]);
/// let buckets: Vec<u8> = quantize(&series).iter().map(|b| b.get()).collect();
/// assert_eq!(buckets, [0, 0, 2, 1, 7]);
/// ```
#[must_use]
pub fn quantize(series: &NumericSeries) -> Vec<Bucket> {
    let Some(max) = series.max() else {
        return Vec::new();
    };
    if max <= 0.0 {
        debug!(max, values = series.len(), "non-positive maximum, using lowest bucket");
    }
    series
        .values()
        .iter()
        .map(|&value| Bucket::for_value(value, max))
        .collect()
}
