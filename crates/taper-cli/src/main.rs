//! taperctl - slider taper tools
//!
//! Resolves taper configs, lists and stress-checks the built-in presets, and
//! prints the example slider gallery.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CheckArgs, ResolveArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "taperctl")]
#[command(about = "Slider taper tools - resolve, inspect and check taper curves")]
#[command(version)]
#[command(long_about = "
taperctl works with the taper engine: the validated forward/inverse function
pairs behind custom-tapered sliders.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a taper config file and tabulate the curve
    Resolve(ResolveArgs),

    /// List built-in presets
    Presets,

    /// Stress-check preset round trips
    Check(CheckArgs),

    /// Print the example slider gallery
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("taperctl={log_level},taper_engine={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, cli.json),
        Commands::Presets => commands::presets::execute(cli.json),
        Commands::Check(args) => commands::check::execute(args, cli.json),
        Commands::Demo => commands::demo::execute(cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taper_engine::PresetName;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_presets_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["taperctl", "presets"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Presets));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_either_side() -> TestResult {
        let before = Cli::try_parse_from(["taperctl", "--json", "demo"])?;
        assert!(before.json);
        let after = Cli::try_parse_from(["taperctl", "demo", "--json"])?;
        assert!(after.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        for (args, expected) in [
            (vec!["taperctl", "demo"], 0),
            (vec!["taperctl", "-v", "demo"], 1),
            (vec!["taperctl", "-vv", "demo"], 2),
            (vec!["taperctl", "-vvv", "demo"], 3),
        ] {
            let cli = Cli::try_parse_from(args)?;
            assert_eq!(cli.verbose, expected);
        }
        Ok(())
    }

    #[test]
    fn parse_resolve() -> TestResult {
        let cli = Cli::try_parse_from(["taperctl", "resolve", "taper.yaml", "--steps", "4"])?;
        match &cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.config.to_str(), Some("taper.yaml"));
                assert_eq!(args.steps, 4);
            }
            _ => return Err("expected Resolve command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_resolve_rejects_zero_steps() {
        assert!(Cli::try_parse_from(["taperctl", "resolve", "t.json", "--steps", "0"]).is_err());
    }

    #[test]
    fn parse_check_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["taperctl", "check"])?;
        match &cli.command {
            Commands::Check(args) => {
                assert!(args.presets.is_empty());
                assert_eq!(args.samples, 1000);
                assert!(args.seed.is_none());
                assert!((args.tolerance - 1e-8).abs() < f64::EPSILON);
            }
            _ => return Err("expected Check command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_check_with_presets() -> TestResult {
        let cli = Cli::try_parse_from([
            "taperctl", "check", "log2", "inv_log10", "-s", "50", "--seed", "9",
        ])?;
        match &cli.command {
            Commands::Check(args) => {
                assert_eq!(args.presets, vec![PresetName::Log2, PresetName::InvLog10]);
                assert_eq!(args.samples, 50);
                assert_eq!(args.seed, Some(9));
            }
            _ => return Err("expected Check command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_check_bounds_samples() -> TestResult {
        let max = crate::commands::MAX_CHECK_SAMPLES.to_string();
        let cli = Cli::try_parse_from(["taperctl", "check", "--samples", max.as_str()])?;
        assert!(matches!(cli.command, Commands::Check(_)));
        assert!(Cli::try_parse_from(["taperctl", "check", "--samples", "10000000000"]).is_err());
        assert!(Cli::try_parse_from(["taperctl", "check", "--samples", "-1"]).is_err());
        Ok(())
    }

    #[test]
    fn parse_check_rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["taperctl", "check", "cubic"]).is_err());
    }

    #[test]
    fn parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["taperctl"]).is_err());
    }
}
