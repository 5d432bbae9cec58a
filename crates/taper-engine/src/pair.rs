//! Validated forward/inverse function pairs and the clamping transform.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::error::TaperError;
use crate::interval::Interval;
use crate::validation::{RoundTrip, Validator};

/// Shared handle to one direction of a pair.
pub type TransferFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A pair of mutually inverse scalar functions plus the domain where the
/// inverse relationship has been checked.
///
/// A `FunctionPair` only exists once its round trip has been validated (see
/// [`Validator`]). It holds no mutable state, so clones share the same
/// function handles and can be sent across threads freely.
///
/// # Example
///
/// ```
/// use taper_engine::{FunctionPair, Interval};
///
/// let pair = FunctionPair::new(|x| x + 1.0, |y| y - 1.0, Interval::new(0.0, 10.0)?)?;
/// assert!((pair.forward(2.0) - 3.0).abs() < 1e-12);
/// assert!((pair.inverse(3.0) - 2.0).abs() < 1e-12);
///
/// // Not an inverse: rejected.
/// assert!(FunctionPair::new(|x| x + 1.0, |y| y, Interval::new(0.0, 10.0)?).is_err());
/// # Ok::<(), taper_engine::TaperError>(())
/// ```
#[derive(Clone)]
pub struct FunctionPair {
    forward: TransferFn,
    inverse: TransferFn,
    domain: Interval,
}

impl fmt::Debug for FunctionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPair")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl FunctionPair {
    /// Build and validate a pair, sampling with an OS-seeded [`Validator`].
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::InverseMismatch`] if any sampled round trip
    /// misses by the tolerance or more.
    pub fn new<F, I>(forward: F, inverse: I, domain: Interval) -> Result<Self, TaperError>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        I: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::with_validator(forward, inverse, domain, &mut Validator::new())
    }

    /// Build and validate a pair with a caller-supplied validator.
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::InverseMismatch`] if any sampled round trip
    /// misses by the tolerance or more.
    pub fn with_validator<F, I, R>(
        forward: F,
        inverse: I,
        domain: Interval,
        validator: &mut Validator<R>,
    ) -> Result<Self, TaperError>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        I: Fn(f64) -> f64 + Send + Sync + 'static,
        R: Rng,
    {
        Self::from_handles(Arc::new(forward), Arc::new(inverse), domain, validator)
    }

    pub(crate) fn from_handles<R: Rng>(
        forward: TransferFn,
        inverse: TransferFn,
        domain: Interval,
        validator: &mut Validator<R>,
    ) -> Result<Self, TaperError> {
        validator.check(forward.as_ref(), inverse.as_ref(), domain)?;
        tracing::debug!(%domain, "function pair validated");
        Ok(Self {
            forward,
            inverse,
            domain,
        })
    }

    /// Apply the forward function.
    #[inline]
    pub fn forward(&self, value: f64) -> f64 {
        (self.forward)(value)
    }

    /// Apply the inverse function.
    #[inline]
    pub fn inverse(&self, value: f64) -> f64 {
        (self.inverse)(value)
    }

    /// Domain the inverse relationship was validated over.
    #[inline]
    pub fn domain(&self) -> Interval {
        self.domain
    }

    /// Shared handle to the forward function.
    pub fn forward_fn(&self) -> TransferFn {
        Arc::clone(&self.forward)
    }

    /// Shared handle to the inverse function.
    pub fn inverse_fn(&self) -> TransferFn {
        Arc::clone(&self.inverse)
    }

    /// Push `value` through `forward` then `inverse`.
    pub fn round_trip(&self, value: f64) -> RoundTrip {
        RoundTrip::measure(self.forward.as_ref(), self.inverse.as_ref(), value)
    }

    /// `forward` evaluated at the low and high domain bounds.
    ///
    /// For a decreasing curve the first element is the larger one.
    pub fn output_bounds(&self) -> (f64, f64) {
        (
            self.forward(self.domain.low()),
            self.forward(self.domain.high()),
        )
    }

    /// Remap this pair so that `range_of_interest` (a slice of this pair's
    /// domain) is presented over `inout_range`, validating with an
    /// OS-seeded [`Validator`].
    ///
    /// # Errors
    ///
    /// See [`FunctionPair::clamped_with`].
    pub fn clamped(
        &self,
        range_of_interest: Interval,
        inout_range: Interval,
    ) -> Result<Self, TaperError> {
        self.clamped_with(range_of_interest, inout_range, &mut Validator::new())
    }

    /// Remap this pair onto `inout_range`:
    ///
    /// ```text
    /// forward'(v) = forward(R.denormalize(B.normalize(v)))
    /// inverse'(y) = B.denormalize(R.normalize(inverse(y)))
    /// domain'     = B
    /// ```
    ///
    /// where `R` is `range_of_interest` and `B` is `inout_range`. Inputs
    /// outside `B` extrapolate along the curve; they are reported at debug
    /// level but not rejected.
    ///
    /// # Errors
    ///
    /// - [`TaperError::OutOfBoundsRangeOfInterest`] if `range_of_interest`
    ///   is not inside this pair's domain.
    /// - [`TaperError::InverseMismatch`] if the remapped pair fails validation
    ///   over `inout_range`.
    ///
    /// # Example
    ///
    /// ```
    /// use taper_engine::{presets, Interval, Validator};
    ///
    /// let log1p = presets::log1p(1.0)?;
    /// let tapered = log1p.clamped_with(
    ///     Interval::new(0.0, 9.0)?,
    ///     Interval::UNIT,
    ///     &mut Validator::seeded(5),
    /// )?;
    /// assert!(tapered.forward(0.0).abs() < 1e-12);
    /// assert!((tapered.forward(1.0) - 10f64.ln()).abs() < 1e-12);
    /// # Ok::<(), taper_engine::TaperError>(())
    /// ```
    pub fn clamped_with<R: Rng>(
        &self,
        range_of_interest: Interval,
        inout_range: Interval,
        validator: &mut Validator<R>,
    ) -> Result<Self, TaperError> {
        if !self.domain.contains_interval(&range_of_interest) {
            return Err(TaperError::OutOfBoundsRangeOfInterest {
                range_of_interest,
                domain: self.domain,
            });
        }

        let forward = Arc::clone(&self.forward);
        let clamped_forward = move |value: f64| {
            let position = inout_range.normalize(value);
            if !(0.0..=1.0).contains(&position) {
                tracing::debug!(
                    value,
                    position,
                    %inout_range,
                    "tapered input outside in/out range, extrapolating"
                );
            }
            forward(range_of_interest.denormalize(position))
        };

        let inverse = Arc::clone(&self.inverse);
        let clamped_inverse = move |value: f64| {
            let position = range_of_interest.normalize(inverse(value));
            inout_range.denormalize(position)
        };

        Self::from_handles(
            Arc::new(clamped_forward),
            Arc::new(clamped_inverse),
            inout_range,
            validator,
        )
    }
}
