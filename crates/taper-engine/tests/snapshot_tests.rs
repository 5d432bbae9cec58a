//! Snapshot tests for user-facing messages and serialized configs using insta.

use taper_engine::{
    FunctionPair, Interval, PresetName, StyleConfig, TaperConfig, TaperEngine, TaperError,
    TaperProfile, TaperStyle, Validator,
};

#[test]
fn snapshot_degenerate_interval_message() {
    let err = match Interval::new(5.0, 1.0) {
        Ok(range) => panic!("expected an error, got {range}"),
        Err(err) => err,
    };
    insta::assert_snapshot!(err, @"degenerate interval [5, 1]: low must be finite and strictly below high");
}

#[test]
fn snapshot_out_of_bounds_message() -> Result<(), TaperError> {
    let profile = TaperProfile::new(TaperStyle::Log1p)
        .with_range_of_interest(Interval::new(0.0, 200000.0)?);
    let err = match TaperEngine::seeded(1).resolve(&profile) {
        Ok(pair) => panic!("expected an error, got {pair:?}"),
        Err(err) => err,
    };
    insta::assert_snapshot!(err, @"range of interest [0, 200000] lies outside the pair's domain [0, 100000]");
    Ok(())
}

#[test]
fn snapshot_inverse_mismatch_message() -> Result<(), TaperError> {
    let err = match FunctionPair::with_validator(
        |x| x + 1.0,
        |y| y,
        Interval::new(0.0, 10.0)?,
        &mut Validator::seeded(1),
    ) {
        Ok(pair) => panic!("expected an error, got {pair:?}"),
        Err(err) => err,
    };
    insta::assert_snapshot!(err, @"inverse mismatch at 0: forward gave 1, inverse recovered 1 (error 1e0, tolerance 1e-8)");
    Ok(())
}

#[test]
fn snapshot_invalid_base_message() {
    let model = TaperEngine::seeded(1).bind(
        &TaperProfile::new(TaperStyle::CustomLogBase { base: 1.0 }),
        0.0,
    );
    let reason = match model {
        taper_engine::SliderModel::Invalid { reason } => reason,
        taper_engine::SliderModel::Ready(_) => panic!("base 1 should not resolve"),
    };
    insta::assert_snapshot!(reason, @"invalid parameter 'base': must be finite, positive and not 1, got 1");
}

#[test]
fn snapshot_preset_domains() {
    let listing = PresetName::ALL
        .iter()
        .map(|name| format!("{name} {}", name.domain()))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(listing, @r"
    log2 [1, 1000000]
    inv_log2 [-1000, 1000]
    log10 [1, 1000000]
    inv_log10 [-300, 300]
    linear [-1000, 1000]
    favorite_log [0, 100000]
    favorite_inv_log [-17, 700]
    ");
}

#[test]
fn snapshot_config_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TaperConfig::new(StyleConfig::CustomLogBase { base: 10.0 });
    config.inout_range = Some(Interval::new(1.0, 10.0)?);
    insta::assert_snapshot!(config.to_json_string()?, @r#"
    {
      "style": {
        "kind": "custom_log_base",
        "base": 10.0
      },
      "inout_range": [
        1.0,
        10.0
      ],
      "validation": {
        "tolerance": 1e-8,
        "interior_samples": 10,
        "seed": null
      }
    }
    "#);
    Ok(())
}
