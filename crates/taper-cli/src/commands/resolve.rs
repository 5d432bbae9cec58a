//! Resolve a taper config file and tabulate the result

use anyhow::Result;
use serde::Serialize;
use taper_engine::{FunctionPair, Interval, SliderBounds, TaperBinding, TaperConfig};

use crate::commands::ResolveArgs;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SamplePoint {
    pub value: f64,
    pub position: f64,
    pub recovered: f64,
}

#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub style: &'static str,
    pub range_of_interest: Interval,
    pub inout_range: Interval,
    pub slider_bounds: SliderBounds,
    pub samples: Vec<SamplePoint>,
}

/// Execute the resolve command
pub fn execute(args: &ResolveArgs, json: bool) -> Result<()> {
    let config = TaperConfig::from_path(&args.config).map_err(CliError::from)?;
    let profile = config.to_profile().map_err(CliError::from)?;
    let mut engine = config.engine().map_err(CliError::from)?;

    tracing::info!(config = %args.config.display(), style = profile.style.label(), "resolving");
    let pair = engine.resolve(&profile).map_err(CliError::from)?;

    let report = ResolveReport {
        style: profile.style.label(),
        range_of_interest: profile.effective_range_of_interest(),
        inout_range: pair.domain(),
        slider_bounds: TaperBinding::new(pair.clone(), pair.domain().low()).slider_bounds(),
        samples: tabulate(&pair, args.steps),
    };
    output::print_resolve_report(&report, json)
}

/// `steps + 1` evenly spaced points across the pair's domain.
pub fn tabulate(pair: &FunctionPair, steps: u32) -> Vec<SamplePoint> {
    let domain = pair.domain();
    (0..=steps)
        .map(|i| {
            let value = domain.denormalize(f64::from(i) / f64::from(steps));
            let position = pair.forward(value);
            SamplePoint {
                value,
                position,
                recovered: pair.inverse(position),
            }
        })
        .collect()
}
