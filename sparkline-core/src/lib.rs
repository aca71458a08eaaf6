//! Sparkline core library.
//!
//! Turns a sequence of text tokens into a one-line chart of block glyphs:
//! tokens are parsed into a [`NumericSeries`], each value is [`quantize`]d
//! into a [`Bucket`] relative to the series maximum, and the buckets are
//! drawn with [`render_glyphs`]. A [`Summary`] reports the count, extremes,
//! and a truncated listing of the values.

mod builder;
mod error;
mod glyph;
mod quantize;
mod series;
mod sparkline;
mod summary;

pub use crate::{
    builder::SparklineBuilder,
    error::{Result, SparklineError, SparklineErrorCode},
    glyph::{GLYPH_COUNT, GLYPHS, render_glyphs},
    quantize::{Bucket, quantize},
    series::{NumericSeries, ParsePolicy, parse_tokens},
    sparkline::{Rendering, Sparkline},
    summary::{DEFAULT_SUMMARY_LIMIT, Summary, TRUNCATION_MARKER},
};
