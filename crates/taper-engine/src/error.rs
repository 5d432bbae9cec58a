//! Error types for taper construction and resolution.

use crate::interval::Interval;

/// Error type for taper operations.
///
/// Every variant is a local, recoverable construction failure. Nothing in
/// this crate panics on bad configuration; callers get one of these instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaperError {
    /// An interval whose low bound is not strictly below its high bound,
    /// or whose bounds are not finite.
    #[error("degenerate interval [{low}, {high}]: low must be finite and strictly below high")]
    DegenerateInterval {
        /// Requested low bound.
        low: f64,
        /// Requested high bound.
        high: f64,
    },

    /// The requested range of interest is not contained in the base pair's domain.
    #[error("range of interest {range_of_interest} lies outside the pair's domain {domain}")]
    OutOfBoundsRangeOfInterest {
        /// The offending range of interest.
        range_of_interest: Interval,
        /// Domain of the pair being clamped.
        domain: Interval,
    },

    /// A sampled round trip `inverse(forward(x))` missed `x` by more than the tolerance.
    #[error(
        "inverse mismatch at {input}: forward gave {output}, inverse recovered {recovered} \
         (error {error:e}, tolerance {tolerance:e})"
    )]
    InverseMismatch {
        /// Sampled input.
        input: f64,
        /// `forward(input)`.
        output: f64,
        /// `inverse(forward(input))`.
        recovered: f64,
        /// Absolute round-trip error (NaN when the round trip produced NaN).
        error: f64,
        /// Tolerance the error was checked against.
        tolerance: f64,
    },

    /// A curve or validation parameter is unusable (zero multiplier, base of one, ...).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl TaperError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        TaperError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TaperError::DegenerateInterval { .. } => "degenerate_interval",
            TaperError::OutOfBoundsRangeOfInterest { .. } => "out_of_bounds_range_of_interest",
            TaperError::InverseMismatch { .. } => "inverse_mismatch",
            TaperError::InvalidParameter { .. } => "invalid_parameter",
        }
    }
}

/// A specialized `Result` type for taper operations.
pub type TaperResult<T> = Result<T, TaperError>;
