//! List built-in presets

use anyhow::Result;
use serde::Serialize;
use taper_engine::{Interval, PresetName};

use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct PresetInfo {
    pub name: PresetName,
    pub domain: Interval,
    pub output_bounds: [f64; 2],
}

/// Execute the presets command
pub fn execute(json: bool) -> Result<()> {
    let presets = collect()?;
    output::print_preset_list(&presets, json)
}

pub fn collect() -> Result<Vec<PresetInfo>, CliError> {
    PresetName::ALL
        .into_iter()
        .map(|name| {
            let pair = name.pair()?;
            let (low, high) = pair.output_bounds();
            Ok(PresetInfo {
                name,
                domain: pair.domain(),
                output_bounds: [low, high],
            })
        })
        .collect()
}
