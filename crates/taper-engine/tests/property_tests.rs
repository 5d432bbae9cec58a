//! Property-based tests for interval math, presets and the clamping transform.

use proptest::prelude::*;
use quickcheck_macros::quickcheck;
use taper_engine::{FunctionPair, Interval, PresetName, TaperError, Validator, presets};

const TOLERANCE: f64 = 1e-8;

fn sanitize_f64(v: f64, limit: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-limit, limit)
    }
}

fn interval_from(a: f64, b: f64) -> Option<Interval> {
    let low = sanitize_f64(a, 1e6);
    let high = low + sanitize_f64(b, 1e6).abs().max(1e-3);
    Interval::new(low, high).ok()
}

#[quickcheck]
fn prop_normalize_denormalize_round_trip(a: f64, b: f64, x: f64) -> bool {
    let Some(range) = interval_from(a, b) else {
        return false;
    };
    let x = sanitize_f64(x, 1e6);
    let back = range.denormalize(range.normalize(x));
    (back - x).abs() <= 1e-9 * (1.0 + x.abs() + range.low().abs())
}

#[quickcheck]
fn prop_normalize_maps_endpoints(a: f64, b: f64) -> bool {
    let Some(range) = interval_from(a, b) else {
        return false;
    };
    range.normalize(range.low()).abs() < 1e-12 && (range.normalize(range.high()) - 1.0).abs() < 1e-9
}

#[quickcheck]
fn prop_midpoint_is_inside(a: f64, b: f64) -> bool {
    let Some(range) = interval_from(a, b) else {
        return false;
    };
    range.contains(range.midpoint()) && (range.normalize(range.midpoint()) - 0.5).abs() < 1e-6
}

#[quickcheck]
fn prop_interval_contains_itself(a: f64, b: f64) -> bool {
    interval_from(a, b).is_some_and(|range| range.contains_interval(&range))
}

fn all_presets() -> Result<Vec<(String, FunctionPair)>, TaperError> {
    let mut pairs = vec![
        ("log1p(1)".to_string(), presets::log1p(1.0)?),
        ("expm1(1)".to_string(), presets::expm1(1.0)?),
        ("custom_base_log(3)".to_string(), presets::custom_base_log(3.0, 1.0)?),
        ("custom_base_log(10)".to_string(), presets::custom_base_log(10.0, 1.0)?),
        ("custom_base_inv_log(3)".to_string(), presets::custom_base_inv_log(3.0, 1.0)?),
        ("custom_base_inv_log(10)".to_string(), presets::custom_base_inv_log(10.0, 1.0)?),
    ];
    for name in PresetName::ALL {
        pairs.push((name.to_string(), name.pair()?.clone()));
    }
    Ok(pairs)
}

#[test]
fn test_every_preset_round_trips_on_1000_samples() -> Result<(), TaperError> {
    let mut validator = Validator::seeded(2024);
    for (name, pair) in all_presets()? {
        for _ in 0..1000 {
            let x = validator.sample(pair.domain());
            let trip = pair.round_trip(x);
            assert!(
                trip.within(TOLERANCE),
                "{name}: x = {x}, recovered {} (error {:e})",
                trip.recovered,
                trip.error()
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_clamped_log1p_round_trips(
        roi_low in 0.0f64..100.0,
        roi_width in 1.0f64..100.0,
        inout_low in -100.0f64..100.0,
        inout_width in 1.0f64..100.0,
        seed in any::<u64>(),
        position in 0.0f64..=1.0,
    ) {
        let range_of_interest = Interval::new(roi_low, roi_low + roi_width)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let inout_range = Interval::new(inout_low, inout_low + inout_width)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut validator = Validator::seeded(seed);

        let base = presets::log1p_with(1.0, &mut validator)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let pair = base
            .clamped_with(range_of_interest, inout_range, &mut validator)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(pair.domain(), inout_range);

        let v = inout_range.denormalize(position);
        let expected = base.forward(range_of_interest.denormalize(position));
        prop_assert!((pair.forward(v) - expected).abs() < 1e-9);
        prop_assert!(pair.round_trip(v).within(TOLERANCE));
    }

    #[test]
    fn prop_clamped_is_monotonic_for_increasing_curves(
        inout_width in 1.0f64..1000.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let inout_range = Interval::new(0.0, inout_width)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let base = presets::log1p(1.0).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let pair = base
            .clamped_with(
                Interval::new(0.0, 9.0).map_err(|e| TestCaseError::fail(e.to_string()))?,
                inout_range,
                &mut Validator::seeded(1),
            )
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            pair.forward(inout_range.denormalize(lo)) <= pair.forward(inout_range.denormalize(hi))
        );
    }

    #[test]
    fn prop_degenerate_intervals_rejected(low in -1e6f64..1e6, shrink in 0.0f64..1e6) {
        prop_assert!(Interval::new(low, low - shrink).is_err());
    }
}
