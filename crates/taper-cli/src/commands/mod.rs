//! Command implementations for taperctl

pub mod check;
pub mod demo;
pub mod presets;
pub mod resolve;

use std::path::PathBuf;

use clap::Args;
use taper_engine::PresetName;
use taper_engine::validation::DEFAULT_TOLERANCE;

/// Upper bound for `check --samples`.
pub const MAX_CHECK_SAMPLES: u64 = 10_000_000;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Taper config file (.json, .yaml or .yml)
    pub config: PathBuf,

    /// Number of equal steps across the in/out range to tabulate
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    pub steps: u32,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Presets to check (all when omitted)
    #[arg(value_parser = parse_preset)]
    pub presets: Vec<PresetName>,

    /// Random samples per preset, in addition to the two endpoints
    #[arg(
        short,
        long,
        default_value_t = 1000,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_CHECK_SAMPLES)
    )]
    pub samples: usize,

    /// Seed for the sampler (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum accepted round-trip error
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

/// Parse a preset by its snake-case name.
pub fn parse_preset(name: &str) -> Result<PresetName, String> {
    PresetName::from_name(name).ok_or_else(|| {
        let known = PresetName::ALL
            .iter()
            .map(PresetName::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown preset '{name}' (expected one of: {known})")
    })
}
