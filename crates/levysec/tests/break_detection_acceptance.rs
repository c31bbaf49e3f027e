//! End-to-end acceptance: the cross-scale features separate a synthetic
//! variance break from a single-regime series across repeated seeded draws.

use levysec::core::test_utils::generators::{gaussian_series, variance_break_series};
use levysec::{MultiScaleConfig, MultiScaleFeatureEngine};

const DRAWS: u64 = 16;
const SERIES_LEN: usize = 2400;

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Population means must sit more than one pooled standard deviation apart.
fn assert_separated(feature: &str, calm: &[f64], broken: &[f64]) {
    let (calm_mean, calm_std) = mean_and_std(calm);
    let (broken_mean, broken_std) = mean_and_std(broken);
    let spread = calm_std.max(broken_std);
    assert!(
        (calm_mean - broken_mean).abs() > spread,
        "{feature}: calm {calm_mean:.4}±{calm_std:.4} vs broken {broken_mean:.4}±{broken_std:.4}"
    );
}

#[test]
fn variance_break_separates_from_single_regime() {
    let engine = MultiScaleFeatureEngine::new(MultiScaleConfig::default()).unwrap();

    let mut calm_signature = Vec::new();
    let mut broken_signature = Vec::new();
    let mut calm_correlation = Vec::new();
    let mut broken_correlation = Vec::new();

    for seed in 0..DRAWS {
        let calm = engine.extract(&gaussian_series(seed, SERIES_LEN, 0.01));
        let broken = engine.extract(&variance_break_series(seed, SERIES_LEN, 0.01, 0.04));

        calm_signature.push(calm.cross.break_signature);
        broken_signature.push(broken.cross.break_signature);
        calm_correlation.push(calm.cross.scale_correlation);
        broken_correlation.push(broken.cross.scale_correlation);
    }

    assert_separated("levy_break_signature", &calm_signature, &broken_signature);
    assert_separated(
        "levy_scale_correlation",
        &calm_correlation,
        &broken_correlation,
    );
}

#[test]
fn break_magnitude_orders_the_signature() {
    let engine = MultiScaleFeatureEngine::new(MultiScaleConfig::default()).unwrap();

    let mut mild = Vec::new();
    let mut severe = Vec::new();
    for seed in 100..100 + DRAWS {
        mild.push(
            engine
                .extract(&variance_break_series(seed, SERIES_LEN, 0.01, 0.02))
                .cross
                .break_signature,
        );
        severe.push(
            engine
                .extract(&variance_break_series(seed, SERIES_LEN, 0.01, 0.04))
                .cross
                .break_signature,
        );
    }

    let (mild_mean, _) = mean_and_std(&mild);
    let (severe_mean, _) = mean_and_std(&severe);
    // Post-break variance shrinks macro durations faster than micro ones
    // (micro durations are already near the single-bar floor), so a larger
    // break compresses the macro/micro ratio further
    assert!(
        severe_mean < mild_mean,
        "mild {mild_mean:.4} vs severe {severe_mean:.4}"
    );
}
