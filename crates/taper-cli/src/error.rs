//! Error types for taperctl

use taper_engine::{ConfigError, TaperError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Round-trip check failed: {0}")]
    CheckFailed(String),

    #[error("Invalid taper: {0}")]
    InvalidTaper(#[from] TaperError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::CheckFailed(_) => 2,
            CliError::InvalidTaper(_) | CliError::Config(ConfigError::Taper(_)) => 3,
            CliError::Config(_) => 4,
            CliError::JsonError(_) => 1,
        }
    }
}
