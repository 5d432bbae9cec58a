//! Closed numeric intervals and the linear range math built on them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaperError;

/// A closed interval `[low, high]` with `low < high`, both bounds finite and
/// a finite span.
///
/// `normalize` and `denormalize` are exact linear inverses of each other and
/// extrapolate outside the interval instead of clamping.
///
/// Serializes as a two-element array `[low, high]`; deserialization runs the
/// same checks as [`Interval::new`].
///
/// # Example
///
/// ```
/// use taper_engine::Interval;
///
/// let range = Interval::new(0.0, 10.0)?;
/// assert!((range.normalize(5.0) - 0.5).abs() < 1e-12);
/// assert!((range.denormalize(0.5) - 5.0).abs() < 1e-12);
///
/// // Extrapolates rather than clamping.
/// assert!((range.normalize(20.0) - 2.0).abs() < 1e-12);
/// # Ok::<(), taper_engine::TaperError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Interval = Interval::from_bounds(0.0, 1.0);

    /// Create an interval.
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::DegenerateInterval`] unless both bounds are
    /// finite, `low < high`, and `high - low` does not overflow.
    pub fn new(low: f64, high: f64) -> Result<Self, TaperError> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(TaperError::DegenerateInterval { low, high });
        }
        Ok(Self { low, high })
    }

    /// Constant constructor for intervals known to be valid at compile time.
    pub(crate) const fn from_bounds(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`. Always positive.
    #[inline]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Difference of the bound magnitudes, `|high| - |low|`.
    #[inline]
    pub fn signed_span(&self) -> f64 {
        self.high.abs() - self.low.abs()
    }

    /// Magnitude of the low bound.
    #[inline]
    pub fn distance_from_zero(&self) -> f64 {
        self.low.abs()
    }

    /// Centre of the interval.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.low + self.span() / 2.0
    }

    /// Map `value` so that `low -> 0` and `high -> 1`.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.low) / self.span()
    }

    /// Map a proportion back into the interval: `0 -> low`, `1 -> high`.
    #[inline]
    pub fn denormalize(&self, proportion: f64) -> f64 {
        proportion * self.span() + self.low
    }

    /// Whether `value` lies in `[low, high]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Whether `other` lies entirely inside this interval.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        other.low >= self.low && other.high <= self.high
    }

    /// Intersect with `limits`.
    ///
    /// Returns `None` when the overlap is empty or a single point.
    pub fn clamped_to(&self, limits: &Interval) -> Option<Interval> {
        let low = self.low.max(limits.low);
        let high = self.high.min(limits.high);
        Interval::new(low, high).ok()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = TaperError;

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        let [low, high] = bounds;
        Interval::new(low, high)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.low, interval.high]
    }
}
