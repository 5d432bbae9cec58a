//! Engine facade plus the value binding handed to a slider.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::TaperError;
use crate::pair::FunctionPair;
use crate::profile::TaperProfile;
use crate::validation::{ValidationConfig, Validator};

/// Text shown in place of a slider whose taper could not be built.
pub const INVALID_CONFIGURATION_MESSAGE: &str = "Slider taper function unable to validate.";

/// Resolves taper profiles with one owned validator.
///
/// # Example
///
/// ```
/// use taper_engine::{TaperEngine, TaperProfile, TaperStyle};
///
/// let mut engine = TaperEngine::seeded(3);
/// let pair = engine.resolve(&TaperProfile::new(TaperStyle::Expm1))?;
/// assert!(pair.forward(0.0).abs() < 1e-12);
/// # Ok::<(), taper_engine::TaperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaperEngine<R = StdRng> {
    validator: Validator<R>,
}

impl TaperEngine<StdRng> {
    /// Engine with an OS-seeded validator.
    pub fn new() -> Self {
        Self::with_validator(Validator::new())
    }

    /// Engine with a fixed validation seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_validator(Validator::seeded(seed))
    }

    /// Engine built from validation settings.
    ///
    /// # Errors
    ///
    /// Returns [`TaperError::InvalidParameter`] if the settings are invalid.
    pub fn from_config(config: ValidationConfig) -> Result<Self, TaperError> {
        Ok(Self::with_validator(Validator::from_config(config)?))
    }
}

impl Default for TaperEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TaperEngine<R> {
    /// Engine around an existing validator.
    pub fn with_validator(validator: Validator<R>) -> Self {
        Self { validator }
    }

    /// The validator used for every resolution.
    pub fn validator(&self) -> &Validator<R> {
        &self.validator
    }

    /// Resolve a profile into a validated pair.
    ///
    /// # Errors
    ///
    /// See [`TaperProfile::resolve_with`].
    pub fn resolve(&mut self, profile: &TaperProfile) -> Result<FunctionPair, TaperError> {
        profile.resolve_with(&mut self.validator)
    }

    /// Resolve a profile and bind it to `initial`.
    ///
    /// Failures degrade to [`SliderModel::Invalid`] and are logged at warn
    /// level rather than returned.
    pub fn bind(&mut self, profile: &TaperProfile, initial: f64) -> SliderModel {
        match self.resolve(profile) {
            Ok(pair) => SliderModel::Ready(TaperBinding::new(pair, initial)),
            Err(err) => {
                tracing::warn!(
                    style = profile.style.label(),
                    error = %err,
                    "taper profile failed to resolve"
                );
                SliderModel::Invalid {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Slider travel limits, `forward` of the in/out range endpoints.
///
/// `min` is taken from the low endpoint, so it is larger than `max` for a
/// decreasing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBounds {
    /// Position at the low end of the in/out range.
    pub min: f64,
    /// Position at the high end of the in/out range.
    pub max: f64,
}

/// A stored value seen through a taper.
///
/// The stored value lives in the in/out range; the slider works in curve
/// space. Reading applies `forward`, writing applies `inverse`.
#[derive(Debug, Clone)]
pub struct TaperBinding {
    pair: FunctionPair,
    stored: f64,
}

impl TaperBinding {
    /// Bind `pair` to an initial stored value.
    pub fn new(pair: FunctionPair, stored: f64) -> Self {
        Self { pair, stored }
    }

    /// Slider position for the stored value.
    pub fn get(&self) -> f64 {
        self.pair.forward(self.stored)
    }

    /// Move the slider to `position`, storing `inverse(position)`.
    pub fn set(&mut self, position: f64) {
        self.stored = self.pair.inverse(position);
    }

    /// The raw stored value.
    pub fn value(&self) -> f64 {
        self.stored
    }

    /// Slider travel limits.
    pub fn slider_bounds(&self) -> SliderBounds {
        let (min, max) = self.pair.output_bounds();
        SliderBounds { min, max }
    }

    /// The pair behind the binding.
    pub fn pair(&self) -> &FunctionPair {
        &self.pair
    }
}

/// What a slider front end should display.
#[derive(Debug, Clone)]
pub enum SliderModel {
    /// A usable binding.
    Ready(TaperBinding),
    /// The taper failed to resolve.
    Invalid {
        /// Why resolution failed.
        reason: String,
    },
}

impl SliderModel {
    /// The binding, when ready.
    pub fn binding(&self) -> Option<&TaperBinding> {
        match self {
            SliderModel::Ready(binding) => Some(binding),
            SliderModel::Invalid { .. } => None,
        }
    }

    /// Mutable access to the binding, when ready.
    pub fn binding_mut(&mut self) -> Option<&mut TaperBinding> {
        match self {
            SliderModel::Ready(binding) => Some(binding),
            SliderModel::Invalid { .. } => None,
        }
    }

    /// Whether the slider can be shown.
    pub fn is_ready(&self) -> bool {
        matches!(self, SliderModel::Ready(_))
    }

    /// Text to render instead of the slider, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SliderModel::Ready(_) => None,
            SliderModel::Invalid { .. } => Some(INVALID_CONFIGURATION_MESSAGE),
        }
    }
}
