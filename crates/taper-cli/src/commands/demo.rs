//! Example slider gallery

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use anyhow::Result;
use serde::Serialize;
use taper_engine::{
    FunctionPair, Interval, SliderBounds, TaperEngine, TaperError, TaperProfile, TaperStyle,
    Validator,
};

use crate::error::CliError;
use crate::output;

/// Seed for the gallery so its output is stable between runs.
const DEMO_SEED: u64 = 0x5eed;

#[derive(Debug, Serialize)]
pub struct DemoSlider {
    pub label: &'static str,
    pub style: &'static str,
    pub value: f64,
    pub position: Option<f64>,
    pub bounds: Option<SliderBounds>,
    pub message: Option<&'static str>,
}

/// Execute the demo command
pub fn execute(json: bool) -> Result<()> {
    let sliders = gallery().map_err(CliError::from)?;
    output::print_demo(&sliders, json)
}

/// `sin(x) + 1` over [π/6, π/3]. Only invertible on a narrow domain.
pub fn sine_pair() -> Result<FunctionPair, TaperError> {
    FunctionPair::with_validator(
        |x: f64| x.sin() + 1.0,
        |y: f64| (y - 1.0).asin(),
        Interval::new(FRAC_PI_6, FRAC_PI_3)?,
        &mut Validator::seeded(DEMO_SEED),
    )
}

pub fn gallery() -> Result<Vec<DemoSlider>, TaperError> {
    let mut engine = TaperEngine::seeded(DEMO_SEED);
    let one_to_ten = Interval::new(1.0, 10.0)?;

    let entries: Vec<(&'static str, TaperProfile, f64)> = vec![
        ("default log1p", TaperProfile::new(TaperStyle::Log1p), 0.5),
        (
            "log1p over 0..100",
            TaperProfile::new(TaperStyle::Log1p).with_inout_range(Interval::new(0.0, 100.0)?),
            50.0,
        ),
        (
            "base 3 exponent, flat slice",
            TaperProfile::new(TaperStyle::CustomInvLogBase { base: 3.0 })
                .with_range_of_interest(Interval::new(0.5, 1.2)?)
                .with_inout_range(one_to_ten),
            5.0,
        ),
        (
            "base 10 log",
            TaperProfile::new(TaperStyle::CustomLogBase { base: 10.0 })
                .with_inout_range(one_to_ten),
            5.0,
        ),
        (
            "custom sine",
            TaperProfile::new(TaperStyle::Custom {
                pair: sine_pair()?,
                clamped: false,
            })
            .with_inout_range(one_to_ten),
            5.0,
        ),
    ];

    Ok(entries
        .into_iter()
        .map(|(label, profile, value)| {
            let model = engine.bind(&profile, value);
            let binding = model.binding();
            DemoSlider {
                label,
                style: profile.style.label(),
                value,
                position: binding.map(|b| b.get()),
                bounds: binding.map(|b| b.slider_bounds()),
                message: model.message(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_all_ready() -> Result<(), TaperError> {
        let sliders = gallery()?;
        assert_eq!(sliders.len(), 5);
        for slider in &sliders {
            assert!(slider.message.is_none(), "{} failed", slider.label);
            assert!(slider.position.is_some());
        }
        Ok(())
    }

    #[test]
    fn test_gallery_default_log1p_position() -> Result<(), TaperError> {
        let sliders = gallery()?;
        let first = sliders.first().and_then(|s| s.position).unwrap_or(f64::NAN);
        assert!((first - 5.5f64.ln()).abs() < 1e-12);
        Ok(())
    }
}
