//! Stress the round trip of built-in presets

use anyhow::Result;
use serde::Serialize;
use taper_engine::{FunctionPair, Interval, PresetName, ValidationConfig, Validator};

use crate::commands::CheckArgs;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub name: PresetName,
    pub domain: Interval,
    pub samples: usize,
    pub max_error: f64,
    pub worst_input: f64,
    pub failures: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// Execute the check command
pub fn execute(args: &CheckArgs, json: bool) -> Result<()> {
    let names: Vec<PresetName> = if args.presets.is_empty() {
        PresetName::ALL.to_vec()
    } else {
        args.presets.clone()
    };

    let config = ValidationConfig {
        tolerance: args.tolerance,
        interior_samples: args.samples,
        seed: args.seed,
    };
    let mut validator = Validator::from_config(config).map_err(CliError::from)?;

    let mut reports = Vec::with_capacity(names.len());
    for name in names {
        let pair = name.pair().map_err(CliError::from)?;
        let report = check_pair(name, pair, &mut validator);
        tracing::debug!(preset = %name, max_error = report.max_error, "checked");
        reports.push(report);
    }

    output::print_check_reports(&reports, json)?;

    let failed: Vec<&str> = reports
        .iter()
        .filter(|r| !r.passed())
        .map(|r| r.name.as_str())
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::CheckFailed(failed.join(", ")).into())
    }
}

/// Sample both endpoints plus the configured number of interior points and
/// record the worst round trip.
pub fn check_pair(name: PresetName, pair: &FunctionPair, validator: &mut Validator) -> CheckReport {
    let domain = pair.domain();
    let tolerance = validator.config().tolerance;
    let interior = validator.config().interior_samples;

    let mut report = CheckReport {
        name,
        domain,
        samples: 0,
        max_error: 0.0,
        worst_input: domain.low(),
        failures: 0,
    };

    let endpoints = [domain.low(), domain.high()];
    let interior_points = (0..interior).map(|_| validator.sample(domain));

    for input in endpoints.into_iter().chain(interior_points) {
        let trip = pair.round_trip(input);
        report.samples += 1;
        if !trip.within(tolerance) {
            report.failures += 1;
        }
        let error = trip.error();
        if error.is_nan() || error > report.max_error {
            report.max_error = error;
            report.worst_input = input;
        }
    }
    report
}
