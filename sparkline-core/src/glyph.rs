//! Glyph table and glyph-line rendering.

use crate::quantize::Bucket;

/// Number of glyphs, and therefore of buckets.
pub const GLYPH_COUNT: u8 = 8;

/// Block glyphs ordered from lowest to tallest.
pub static GLYPHS: [char; GLYPH_COUNT as usize] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

impl Bucket {
    /// Returns the glyph drawn for this bucket.
    ///
    /// # Examples
    /// ```
    /// use sparkline_core::{Bucket, GLYPHS};
    ///
    /// assert_eq!(Bucket::LOWEST.glyph(), '▁');
    /// assert_eq!(Bucket::HIGHEST.glyph(), '█');
    /// assert_eq!(Bucket::new(3).glyph(), GLYPHS[3]);
    /// ```
    #[must_use]
    pub fn glyph(self) -> char {
        // `Bucket` never exceeds the last glyph index.
        GLYPHS[usize::from(self.get())]
    }
}

/// Concatenates the glyph of every bucket, in order.
///
/// The returned line carries no trailing newline; an empty slice renders as
/// the empty string.
///
/// # Examples
/// ```
/// use sparkline_core::{Bucket, render_glyphs};
///
/// let line = render_glyphs(&[Bucket::new(0), Bucket::new(4), Bucket::new(7)]);
/// assert_eq!(line, "▁▅█");
/// assert_eq!(render_glyphs(&[]), "");
/// ```
#[must_use]
pub fn render_glyphs(buckets: &[Bucket]) -> String {
    buckets.iter().map(|bucket| bucket.glyph()).collect()
}
