//! Taper engine for custom-tapered sliders
//!
//! A taper maps a linear slider position through a nonlinear curve. This crate
//! builds those curves as validated forward/inverse pairs and remaps them onto
//! the range a slider actually presents.
//!
//! # Overview
//!
//! - [`Interval`]: closed ranges with linear normalize/denormalize.
//! - [`FunctionPair`]: a forward function, its inverse, and the domain where
//!   the round trip was checked by random sampling.
//! - [`presets`]: log1p, expm1, custom-base log and exponent, log2, log10 and
//!   a few fixed favourites.
//! - [`TaperProfile`]: a style plus optional range overrides, resolved to a
//!   single pair whose domain is the slider's in/out range.
//! - [`TaperEngine`]: facade that resolves profiles and binds them to a
//!   stored value, degrading to [`SliderModel::Invalid`] on failure.
//! - [`TaperConfig`]: the same profiles loaded from JSON or YAML.
//!
//! # Validation
//!
//! A pair is accepted when `|inverse(forward(x)) - x| < 1e-8` at both domain
//! endpoints and ten uniformly random interior points. The random source is
//! owned by a [`Validator`] and can be seeded for reproducible results.
//!
//! # Example
//!
//! ```
//! use taper_engine::{Interval, TaperEngine, TaperProfile, TaperStyle};
//!
//! let mut engine = TaperEngine::seeded(42);
//! let profile = TaperProfile::new(TaperStyle::CustomLogBase { base: 3.0 })
//!     .with_inout_range(Interval::new(1.0, 10.0)?);
//!
//! let pair = engine.resolve(&profile)?;
//! let position = pair.forward(5.5);
//! assert!((pair.inverse(position) - 5.5).abs() < 1e-8);
//! # Ok::<(), taper_engine::TaperError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod engine;
pub mod error;
pub mod interval;
pub mod pair;
pub mod presets;
pub mod profile;
pub mod validation;

pub use config::{ConfigError, StyleConfig, TaperConfig};
pub use engine::{
    INVALID_CONFIGURATION_MESSAGE, SliderBounds, SliderModel, TaperBinding, TaperEngine,
};
pub use error::{TaperError, TaperResult};
pub use interval::Interval;
pub use pair::{FunctionPair, TransferFn};
pub use presets::PresetName;
pub use profile::{TaperProfile, TaperStyle};
pub use validation::{RoundTrip, ValidationConfig, Validator};
