//! Per-scale descriptive statistics of Lévy sections

use crate::features::ScaleFeatureSet;
use crate::sectionizer::LevySection;

/// Central moments m2/m3/m4 in a single fold pass.
///
/// Returns (mean, std, skewness, excess kurtosis); skew and kurtosis
/// collapse to 0 when the dispersion is numerically zero.
fn moments(values: &[f64]) -> (f64, f64, f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let (m2, m3, m4) = values.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &v| {
        let d = v - mean;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    });
    let m2 = m2 / n;
    let m3 = m3 / n;
    let m4 = m4 / n;

    let std = m2.sqrt();
    if std < f64::EPSILON {
        return (mean, 0.0, 0.0, 0.0);
    }

    let skew = m3 / std.powi(3);
    let kurtosis = m4 / std.powi(4) - 3.0;
    (mean, std, skew, kurtosis)
}

/// Count adjacent duration pairs whose ratio exceeds `ratio_threshold` in
/// either direction. Durations are >= 1 so the ratio is always defined.
fn count_regime_changes(durations: &[f64], ratio_threshold: f64) -> usize {
    durations
        .windows(2)
        .filter(|w| {
            let (a, b) = (w[0], w[1]);
            a / b > ratio_threshold || b / a > ratio_threshold
        })
        .count()
}

/// Summarize one scale's sections into its fixed-schema feature set.
///
/// With fewer than `min_sections` sections the scale is flagged invalid and
/// every magnitude gets the sentinel value; validity itself is informative
/// and no error is raised.
pub fn summarize(
    sections: &[LevySection],
    tau: f64,
    min_sections: usize,
    regime_change_ratio_threshold: f64,
) -> ScaleFeatureSet {
    if sections.len() < min_sections {
        return ScaleFeatureSet::invalid(tau, sections.len());
    }

    let durations: Vec<f64> = sections.iter().map(|s| s.duration as f64).collect();
    let (mean, std, skew, kurtosis) = moments(&durations);

    let min = durations.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = durations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Sections close at acc >= tau with tau > 0, so mean >= 1 and the CV
    // denominator is never zero
    let cv = std / mean;

    // Normalize section sums by sqrt(tau): under the no-break null these
    // should be close to standard Gaussian, so excess kurtosis near 0
    let sqrt_tau = tau.sqrt();
    let normalized_sums: Vec<f64> = sections.iter().map(|s| s.return_sum / sqrt_tau).collect();
    let (_, _, _, sum_kurtosis) = moments(&normalized_sums);

    ScaleFeatureSet {
        tau,
        valid: true,
        n_sections: sections.len(),
        duration_mean: mean,
        duration_std: std,
        duration_cv: cv,
        duration_min: min,
        duration_max: max,
        duration_skew: skew,
        duration_kurtosis: kurtosis,
        regime_changes: count_regime_changes(&durations, regime_change_ratio_threshold) as f64,
        sum_norm_kurtosis: sum_kurtosis.abs(),
    }
}
