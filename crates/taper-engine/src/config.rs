//! Serde model of taper profiles for JSON and YAML files.
//!
//! ```yaml
//! style:
//!   kind: custom_inv_log_base
//!   base: 3.0
//! range_of_interest: [0.5, 1.2]
//! inout_range: [1.0, 10.0]
//! validation:
//!   seed: 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::TaperEngine;
use crate::error::TaperError;
use crate::interval::Interval;
use crate::presets::PresetName;
use crate::profile::{TaperProfile, TaperStyle};
use crate::validation::ValidationConfig;

/// Errors from loading a [`TaperConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON was malformed or did not match the model.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML was malformed or did not match the model.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration parsed but describes an unusable taper.
    #[error(transparent)]
    Taper(#[from] TaperError),

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported config format '{0}': expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
}

/// Curve style as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleConfig {
    /// [`TaperStyle::Log1p`].
    Log1p,
    /// [`TaperStyle::Expm1`].
    Expm1,
    /// [`TaperStyle::CustomLogBase`].
    CustomLogBase {
        /// Logarithm base.
        base: f64,
    },
    /// [`TaperStyle::CustomInvLogBase`].
    CustomInvLogBase {
        /// Exponent base.
        base: f64,
    },
    /// A named preset used as a [`TaperStyle::Custom`] pair.
    Preset {
        /// Which preset.
        name: PresetName,
        /// Use the preset as-is instead of clamping it.
        #[serde(default)]
        clamped: bool,
    },
}

impl StyleConfig {
    /// Build the runtime style. Presets are fetched from the process-wide cache.
    ///
    /// # Errors
    ///
    /// Returns the preset's construction error if it failed validation.
    pub fn to_style(&self) -> Result<TaperStyle, TaperError> {
        Ok(match *self {
            StyleConfig::Log1p => TaperStyle::Log1p,
            StyleConfig::Expm1 => TaperStyle::Expm1,
            StyleConfig::CustomLogBase { base } => TaperStyle::CustomLogBase { base },
            StyleConfig::CustomInvLogBase { base } => TaperStyle::CustomInvLogBase { base },
            StyleConfig::Preset { name, clamped } => TaperStyle::Custom {
                pair: name.pair()?.clone(),
                clamped,
            },
        })
    }
}

/// One taper profile plus the validation settings used to resolve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaperConfig {
    /// Curve style.
    pub style: StyleConfig,
    /// Range of interest override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_of_interest: Option<Interval>,
    /// In/out range override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inout_range: Option<Interval>,
    /// Validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl TaperConfig {
    /// Config for `style` with default ranges and validation.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            range_of_interest: None,
            inout_range: None,
            validation: ValidationConfig::default(),
        }
    }

    /// Parse JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed input or degenerate intervals.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse YAML.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Yaml`] for malformed input or degenerate intervals.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedFormat`] for any other extension, otherwise
    /// the I/O or parse error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the runtime profile.
    ///
    /// # Errors
    ///
    /// See [`StyleConfig::to_style`].
    pub fn to_profile(&self) -> Result<TaperProfile, TaperError> {
        Ok(TaperProfile {
            style: self.style.to_style()?,
            range_of_interest: self.range_of_interest,
            inout_range: self.inout_range,
        })
    }

    /// Engine configured with this file's validation settings.
    ///
    /// # Errors
    ///
    /// [`TaperError::InvalidParameter`] for unusable validation settings.
    pub fn engine(&self) -> Result<TaperEngine, TaperError> {
        TaperEngine::from_config(self.validation)
    }
}
