//! Error types for the sparkline core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running [`crate::Sparkline`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SparklineError {
    /// The verbose summary must be allowed to list at least one value.
    #[error("summary_limit must be at least 1 (got {got})")]
    InvalidSummaryLimit {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
    /// No usable numeric value remained after parsing the tokens.
    #[error("no numeric values in {tokens} token(s)")]
    EmptySeries {
        /// Number of tokens that were supplied.
        tokens: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SparklineError`] variants.
    enum SparklineErrorCode for SparklineError {
        /// The verbose summary must be allowed to list at least one value.
        InvalidSummaryLimit => InvalidSummaryLimit { .. } => "SPARKLINE_INVALID_SUMMARY_LIMIT",
        /// No usable numeric value remained after parsing the tokens.
        EmptySeries => EmptySeries { .. } => "SPARKLINE_EMPTY_SERIES",
    }
}

impl SparklineError {
    /// Returns `true` when the error means the caller supplied nothing to draw.
    ///
    /// # Examples
    /// ```
    /// use sparkline_core::SparklineError;
    ///
    /// assert!(SparklineError::EmptySeries { tokens: 0 }.is_no_input());
    /// assert!(!SparklineError::InvalidSummaryLimit { got: 0 }.is_no_input());
    /// ```
    #[must_use]
    pub const fn is_no_input(&self) -> bool {
        matches!(self, Self::EmptySeries { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SparklineError>;
