//! Round-trip validation of forward/inverse pairs.
//!
//! A pair is accepted when `inverse(forward(x))` lands back on `x` (within an
//! absolute tolerance) for both domain endpoints and a fixed number of
//! uniformly drawn interior points. Sampling is a pragmatic check, not a
//! proof: it can miss a bad region between samples, and it can reject a
//! valid pair whose round trip loses precision at extreme magnitudes.
//!
//! The random source is owned by the [`Validator`] so callers can seed it
//! and get reproducible results.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::TaperError;
use crate::interval::Interval;

/// Absolute round-trip tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Number of random interior samples taken in addition to the two endpoints.
pub const DEFAULT_INTERIOR_SAMPLES: usize = 10;

/// Settings for round-trip validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum accepted `|inverse(forward(x)) - x|`.
    pub tolerance: f64,
    /// Random interior samples per check.
    pub interior_samples: usize,
    /// Seed for the sampling RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            interior_samples: DEFAULT_INTERIOR_SAMPLES,
            seed: None,
        }
    }
}

impl ValidationConfig {
    /// Check the settings themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::InvalidParameter`] if the tolerance is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), TaperError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TaperError::invalid_parameter(
                "tolerance",
                format!("must be positive and finite, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}

/// Outcome of pushing one value through a pair and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTrip {
    /// The sampled value.
    pub input: f64,
    /// `forward(input)`.
    pub output: f64,
    /// `inverse(output)`.
    pub recovered: f64,
}

impl RoundTrip {
    /// Evaluate a round trip.
    pub fn measure(forward: &dyn Fn(f64) -> f64, inverse: &dyn Fn(f64) -> f64, input: f64) -> Self {
        let output = forward(input);
        let recovered = inverse(output);
        Self {
            input,
            output,
            recovered,
        }
    }

    /// Absolute error of the round trip. NaN if any step produced NaN.
    #[inline]
    pub fn error(&self) -> f64 {
        (self.recovered - self.input).abs()
    }

    /// Whether the round trip is within `tolerance`. A NaN error never is.
    #[inline]
    pub fn within(&self, tolerance: f64) -> bool {
        self.error() < tolerance
    }

    fn into_error(self, tolerance: f64) -> TaperError {
        TaperError::InverseMismatch {
            input: self.input,
            output: self.output,
            recovered: self.recovered,
            error: self.error(),
            tolerance,
        }
    }
}

/// Samples a domain and checks the inverse relationship at each sample.
///
/// # Example
///
/// ```
/// use taper_engine::{Interval, Validator};
///
/// let mut validator = Validator::seeded(7);
/// let domain = Interval::new(0.0, 10.0)?;
/// validator.check(&|x| x + 1.0, &|y| y - 1.0, domain)?;
/// assert!(validator.check(&|x| x + 1.0, &|y| y, domain).is_err());
/// # Ok::<(), taper_engine::TaperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Validator<R = StdRng> {
    config: ValidationConfig,
    rng: R,
}

impl Validator<StdRng> {
    /// Validator with default settings, seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(ValidationConfig::default(), StdRng::from_os_rng())
    }

    /// Validator with default settings and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ValidationConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Validator built from settings; uses `config.seed` when present.
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::InvalidParameter`] if the settings are invalid.
    pub fn from_config(config: ValidationConfig) -> Result<Self, TaperError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::with_rng(config, rng))
    }
}

impl Default for Validator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Validator<R> {
    /// Validator around a caller-supplied random source.
    pub fn with_rng(config: ValidationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Active settings.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Draw one uniform sample from `domain`.
    pub fn sample(&mut self, domain: Interval) -> f64 {
        self.rng.random_range(domain.low()..=domain.high())
    }

    /// Check `inverse(forward(x)) ≈ x` at the endpoints of `domain` and at
    /// `interior_samples` random points inside it.
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::InverseMismatch`] for the first failing sample.
    pub fn check(
        &mut self,
        forward: &dyn Fn(f64) -> f64,
        inverse: &dyn Fn(f64) -> f64,
        domain: Interval,
    ) -> Result<(), TaperError> {
        let tolerance = self.config.tolerance;

        for input in [domain.low(), domain.high()] {
            Self::check_sample(forward, inverse, input, tolerance)?;
        }

        for _ in 0..self.config.interior_samples {
            let input = self.sample(domain);
            Self::check_sample(forward, inverse, input, tolerance)?;
        }

        Ok(())
    }

    fn check_sample(
        forward: &dyn Fn(f64) -> f64,
        inverse: &dyn Fn(f64) -> f64,
        input: f64,
        tolerance: f64,
    ) -> Result<(), TaperError> {
        let trip = RoundTrip::measure(forward, inverse, input);
        tracing::trace!(
            input = trip.input,
            output = trip.output,
            recovered = trip.recovered,
            "round trip sample"
        );
        if trip.within(tolerance) {
            Ok(())
        } else {
            Err(trip.into_error(tolerance))
        }
    }
}
