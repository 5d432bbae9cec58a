//! Taper profiles: a named style plus optional range overrides.

use rand::Rng;

use crate::error::TaperError;
use crate::interval::Interval;
use crate::pair::FunctionPair;
use crate::presets;
use crate::validation::Validator;

/// Default range of interest for [`TaperStyle::Log1p`].
pub const LOG1P_RANGE_OF_INTEREST: Interval = Interval::from_bounds(0.0, 9.0);

/// Default range of interest for [`TaperStyle::Expm1`].
pub const EXPM1_RANGE_OF_INTEREST: Interval = Interval::from_bounds(0.0, 1.5);

/// Default range of interest for both custom-base styles.
pub const CUSTOM_BASE_RANGE_OF_INTEREST: Interval = Interval::from_bounds(0.7, 2.0);

/// The curve a slider follows.
#[derive(Debug, Clone)]
pub enum TaperStyle {
    /// `ln(1 + x)`.
    Log1p,
    /// `e^x - 1`.
    Expm1,
    /// `log_base(x)`.
    CustomLogBase {
        /// Logarithm base.
        base: f64,
    },
    /// `base^x`.
    CustomInvLogBase {
        /// Exponent base.
        base: f64,
    },
    /// A caller-supplied pair.
    ///
    /// With `clamped` set the pair is assumed to already map the slider's
    /// in/out range and is used untouched. Otherwise it goes through the
    /// clamping transform like the built-in styles.
    Custom {
        /// The pair to use.
        pair: FunctionPair,
        /// Whether `pair` already covers the in/out range.
        clamped: bool,
    },
}

impl TaperStyle {
    /// Range of interest used when a profile does not set one.
    pub fn default_range_of_interest(&self) -> Interval {
        match self {
            TaperStyle::Log1p => LOG1P_RANGE_OF_INTEREST,
            TaperStyle::Expm1 => EXPM1_RANGE_OF_INTEREST,
            TaperStyle::CustomLogBase { .. } | TaperStyle::CustomInvLogBase { .. } => {
                CUSTOM_BASE_RANGE_OF_INTEREST
            }
            TaperStyle::Custom { pair, .. } => pair.domain(),
        }
    }

    /// In/out range used when a profile does not set one.
    pub fn default_inout_range(&self) -> Interval {
        match self {
            TaperStyle::Custom {
                pair,
                clamped: true,
            } => pair.domain(),
            _ => Interval::UNIT,
        }
    }

    /// Short label for logs and listings.
    pub fn label(&self) -> &'static str {
        match self {
            TaperStyle::Log1p => "log1p",
            TaperStyle::Expm1 => "expm1",
            TaperStyle::CustomLogBase { .. } => "custom_log_base",
            TaperStyle::CustomInvLogBase { .. } => "custom_inv_log_base",
            TaperStyle::Custom { clamped: true, .. } => "custom_clamped",
            TaperStyle::Custom { clamped: false, .. } => "custom",
        }
    }

    fn base_pair<R: Rng>(&self, validator: &mut Validator<R>) -> Result<FunctionPair, TaperError> {
        match self {
            TaperStyle::Log1p => presets::log1p_with(1.0, validator),
            TaperStyle::Expm1 => presets::expm1_with(1.0, validator),
            TaperStyle::CustomLogBase { base } => {
                presets::custom_base_log_with(*base, 1.0, validator)
            }
            TaperStyle::CustomInvLogBase { base } => {
                presets::custom_base_inv_log_with(*base, 1.0, validator)
            }
            TaperStyle::Custom { pair, .. } => Ok(pair.clone()),
        }
    }
}

/// A style plus optional overrides for the range of interest and the
/// in/out range.
///
/// # Example
///
/// ```
/// use taper_engine::{Interval, TaperProfile, TaperStyle, Validator};
///
/// let profile = TaperProfile::new(TaperStyle::Log1p)
///     .with_inout_range(Interval::new(0.0, 100.0)?);
/// let pair = profile.resolve_with(&mut Validator::seeded(1))?;
///
/// assert_eq!(pair.domain(), Interval::new(0.0, 100.0)?);
/// assert!((pair.forward(100.0) - 10f64.ln()).abs() < 1e-12);
/// # Ok::<(), taper_engine::TaperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaperProfile {
    /// Curve style.
    pub style: TaperStyle,
    /// Slice of the curve's domain to use; style default when `None`.
    pub range_of_interest: Option<Interval>,
    /// Linear range the slider presents; style default when `None`.
    pub inout_range: Option<Interval>,
}

impl TaperProfile {
    /// Profile using the style's default ranges.
    pub fn new(style: TaperStyle) -> Self {
        Self {
            style,
            range_of_interest: None,
            inout_range: None,
        }
    }

    /// Override the range of interest.
    pub fn with_range_of_interest(mut self, range: Interval) -> Self {
        self.range_of_interest = Some(range);
        self
    }

    /// Override the in/out range.
    pub fn with_inout_range(mut self, range: Interval) -> Self {
        self.inout_range = Some(range);
        self
    }

    /// Range of interest after defaults are applied.
    pub fn effective_range_of_interest(&self) -> Interval {
        self.range_of_interest
            .unwrap_or_else(|| self.style.default_range_of_interest())
    }

    /// In/out range after defaults are applied.
    pub fn effective_inout_range(&self) -> Interval {
        self.inout_range
            .unwrap_or_else(|| self.style.default_inout_range())
    }

    /// Resolve with an OS-seeded validator.
    ///
    /// # Errors
    ///
    /// See [`TaperProfile::resolve_with`].
    pub fn resolve(&self) -> Result<FunctionPair, TaperError> {
        self.resolve_with(&mut Validator::new())
    }

    /// Turn the profile into a validated pair whose domain is the in/out range.
    ///
    /// A [`TaperStyle::Custom`] pair flagged `clamped` is returned as-is;
    /// every other style goes through [`FunctionPair::clamped_with`].
    ///
    /// # Errors
    ///
    /// - [`TaperError::InvalidParameter`] for an unusable base.
    /// - [`TaperError::OutOfBoundsRangeOfInterest`] when the range of interest
    ///   leaves the curve's domain.
    /// - [`TaperError::InverseMismatch`] when the curve or its remapping fails
    ///   validation.
    pub fn resolve_with<R: Rng>(
        &self,
        validator: &mut Validator<R>,
    ) -> Result<FunctionPair, TaperError> {
        if let TaperStyle::Custom {
            pair,
            clamped: true,
        } = &self.style
        {
            if self.range_of_interest.is_some() || self.inout_range.is_some() {
                tracing::warn!("range overrides ignored for an already clamped custom pair");
            }
            return Ok(pair.clone());
        }

        let range_of_interest = self.effective_range_of_interest();
        let inout_range = self.effective_inout_range();
        tracing::debug!(
            style = self.style.label(),
            %range_of_interest,
            %inout_range,
            "resolving taper profile"
        );

        let base = self.style.base_pair(validator)?;
        base.clamped_with(range_of_interest, inout_range, validator)
    }
}
