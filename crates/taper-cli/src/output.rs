//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use serde::Serialize;
use serde_json::json;

use crate::commands::check::CheckReport;
use crate::commands::demo::DemoSlider;
use crate::commands::presets::PresetInfo;
use crate::commands::resolve::ResolveReport;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::CheckFailed(_)) => "check_failed",
        Some(CliError::InvalidTaper(e)) => e.kind(),
        Some(CliError::Config(_)) => "config",
        Some(CliError::JsonError(_)) => "json",
        None => "unknown",
    }
}

fn print_json_success<T: Serialize>(key: &str, value: &T) -> Result<()> {
    let value = serde_json::to_value(value).map_err(CliError::from)?;
    let output = json!({ "success": true, key: value });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).map_err(CliError::from)?
    );
    Ok(())
}

/// Print a resolved taper
pub fn print_resolve_report(report: &ResolveReport, json: bool) -> Result<()> {
    if json {
        return print_json_success("taper", report);
    }

    println!("{} {}", "Style:".bold(), report.style.cyan());
    println!("  Range of interest: {}", report.range_of_interest);
    println!("  In/out range:      {}", report.inout_range);
    println!(
        "  Slider bounds:     {:.6} .. {:.6}",
        report.slider_bounds.min, report.slider_bounds.max
    );
    println!();
    println!(
        "  {:>14}  {:>14}  {:>14}",
        "value".bold(),
        "position".bold(),
        "recovered".bold()
    );
    for point in &report.samples {
        println!(
            "  {:>14.6}  {:>14.6}  {:>14.6}",
            point.value, point.position, point.recovered
        );
    }
    Ok(())
}

/// Print the preset listing
pub fn print_preset_list(presets: &[PresetInfo], json: bool) -> Result<()> {
    if json {
        return print_json_success("presets", &presets);
    }

    println!("{}", "Built-in presets:".bold());
    for preset in presets {
        let [low, high] = preset.output_bounds;
        println!(
            "  {} {:<18} domain {:<24} output {:.6} .. {:.6}",
            "●".green(),
            preset.name.as_str().bold(),
            preset.domain.to_string(),
            low,
            high
        );
    }
    Ok(())
}

/// Print round-trip check results
pub fn print_check_reports(reports: &[CheckReport], json: bool) -> Result<()> {
    if json {
        return print_json_success("checks", &reports);
    }

    for report in reports {
        let status = if report.passed() {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "  {status} {:<18} {} samples, max error {:e} at {}, {} failures",
            report.name.as_str(),
            report.samples,
            report.max_error,
            report.worst_input,
            report.failures
        );
    }
    Ok(())
}

/// Print the example gallery
pub fn print_demo(sliders: &[DemoSlider], json: bool) -> Result<()> {
    if json {
        return print_json_success("sliders", &sliders);
    }

    for (index, slider) in sliders.iter().enumerate() {
        println!(
            "{} {} ({})",
            format!("Slider {}:", index + 1).bold(),
            slider.label,
            slider.style.dimmed()
        );
        match (slider.position, slider.bounds, slider.message) {
            (Some(position), Some(bounds), _) => {
                println!("  Value:    {}", slider.value);
                println!("  Position: {position:.6}");
                println!("  Travel:   {:.6} .. {:.6}", bounds.min, bounds.max);
            }
            (_, _, Some(message)) => println!("  {}", message.yellow()),
            _ => println!("  {}", "unavailable".yellow()),
        }
    }
    Ok(())
}
