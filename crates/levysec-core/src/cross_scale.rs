//! Cross-scale interaction features
//!
//! Combines the per-scale feature sets into the interaction block: how the
//! section-duration structure moves across the tau ladder. A single
//! stationary regime shows mean durations growing monotonically with tau;
//! a structural break compresses the micro end while leaving the macro end
//! comparatively stable, which these features are built to expose.

use crate::features::{CrossScaleFeatures, FeatureVector, ScaleFeatureSet};

/// Pearson correlation; 0 when either side is numerically constant.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator < f64::EPSILON {
        0.0
    } else {
        cov / denominator
    }
}

/// Canonical micro/macro scale indices for the break signature.
///
/// With 4+ scales the signature compares the second and second-to-last
/// scales (the inner micro/macro bands), avoiding the noisiest extremes of
/// the ladder; shorter ladders fall back to the outermost pair.
fn signature_band(n_scales: usize) -> (usize, usize) {
    if n_scales >= 4 {
        (1, n_scales - 2)
    } else {
        (0, n_scales - 1)
    }
}

/// Join the per-scale sets into the final feature vector.
///
/// Input sets may arrive in any completion order; they are re-sorted into
/// canonical tau order before combining, so the output schema is stable
/// regardless of how parallel scale computations finished. With fewer than
/// 2 valid scales every interaction feature takes its neutral default
/// instead of failing.
pub fn aggregate(mut scales: Vec<ScaleFeatureSet>) -> FeatureVector {
    scales.sort_by(|a, b| a.tau.total_cmp(&b.tau));

    let valid: Vec<(usize, &ScaleFeatureSet)> = scales
        .iter()
        .enumerate()
        .filter(|(_, s)| s.valid)
        .collect();

    let n_valid = valid.len();
    if n_valid < 2 {
        let cross = CrossScaleFeatures::neutral(n_valid);
        return FeatureVector { scales, cross };
    }

    let indices: Vec<f64> = valid.iter().map(|(i, _)| *i as f64).collect();
    let means: Vec<f64> = valid.iter().map(|(_, s)| s.duration_mean).collect();

    // (a) monotonicity of mean duration across the ladder
    let scale_correlation = pearson(&indices, &means);

    // (b) largest vs smallest valid scale; valid means are >= 1 section
    // point so the ratio is always defined
    let extreme_scale_ratio = means[means.len() - 1] / means[0];

    // (c) dispersion of mean durations, normalized by their average
    let n = means.len() as f64;
    let mean_of_means = means.iter().sum::<f64>() / n;
    let variance = means.iter().map(|m| (m - mean_of_means).powi(2)).sum::<f64>() / n;
    let cross_scale_cv = variance.sqrt() / mean_of_means;

    // (d) instability propagation from the finest to the coarsest valid scale
    let cv_propagation = valid[n_valid - 1].1.duration_cv - valid[0].1.duration_cv;

    // (e) break signature over the canonical micro/macro band
    let (micro_idx, macro_idx) = signature_band(scales.len());
    let break_signature = if n_valid >= 3 && scales[micro_idx].valid && scales[macro_idx].valid {
        scales[macro_idx].duration_mean / scales[micro_idx].duration_mean
    } else {
        1.0
    };

    let cross = CrossScaleFeatures {
        n_valid_scales: n_valid,
        scale_correlation,
        extreme_scale_ratio,
        cross_scale_cv,
        cv_propagation,
        break_signature,
    };

    FeatureVector { scales, cross }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_set(tau: f64, mean: f64, cv: f64) -> ScaleFeatureSet {
        ScaleFeatureSet {
            tau,
            valid: true,
            n_sections: 50,
            duration_mean: mean,
            duration_std: cv * mean,
            duration_cv: cv,
            duration_min: 1.0,
            duration_max: mean * 2.0,
            duration_skew: 0.0,
            duration_kurtosis: 0.0,
            regime_changes: 0.0,
            sum_norm_kurtosis: 0.1,
        }
    }

    #[test]
    fn monotone_means_give_positive_correlation() {
        let fv = aggregate(vec![
            valid_set(0.0001, 1.0, 0.1),
            valid_set(0.0005, 5.0, 0.1),
            valid_set(0.001, 10.0, 0.2),
            valid_set(0.005, 50.0, 0.2),
            valid_set(0.01, 100.0, 0.3),
        ]);

        assert_eq!(fv.cross.n_valid_scales, 5);
        assert!(fv.cross.scale_correlation > 0.8);
        assert!((fv.cross.extreme_scale_ratio - 100.0).abs() < 1e-9);
        // signature band: s2 and s4
        assert!((fv.cross.break_signature - 10.0).abs() < 1e-9);
        assert!((fv.cross.cv_propagation - 0.2).abs() < 1e-12);
    }

    #[test]
    fn fewer_than_two_valid_scales_are_neutral() {
        let fv = aggregate(vec![
            ScaleFeatureSet::invalid(0.001, 1),
            valid_set(0.01, 20.0, 0.2),
            ScaleFeatureSet::invalid(0.1, 0),
        ]);

        assert_eq!(fv.cross.n_valid_scales, 1);
        assert_eq!(fv.cross.scale_correlation, 0.0);
        assert_eq!(fv.cross.extreme_scale_ratio, 1.0);
        assert_eq!(fv.cross.cross_scale_cv, 0.0);
        assert_eq!(fv.cross.cv_propagation, 0.0);
        assert_eq!(fv.cross.break_signature, 1.0);
    }

    #[test]
    fn signature_neutral_when_band_scale_invalid() {
        // 5-scale ladder with the s2 band scale invalid: signature must
        // fall back to neutral even though 3 scales are valid
        let fv = aggregate(vec![
            valid_set(0.0001, 1.0, 0.1),
            ScaleFeatureSet::invalid(0.0005, 2),
            valid_set(0.001, 10.0, 0.2),
            valid_set(0.005, 50.0, 0.2),
            ScaleFeatureSet::invalid(0.01, 1),
        ]);
        assert_eq!(fv.cross.n_valid_scales, 3);
        assert_eq!(fv.cross.break_signature, 1.0);
    }

    #[test]
    fn input_order_does_not_matter() {
        let sorted = aggregate(vec![
            valid_set(0.0001, 1.0, 0.1),
            valid_set(0.001, 10.0, 0.2),
            valid_set(0.01, 100.0, 0.3),
        ]);
        let shuffled = aggregate(vec![
            valid_set(0.01, 100.0, 0.3),
            valid_set(0.0001, 1.0, 0.1),
            valid_set(0.001, 10.0, 0.2),
        ]);
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn pearson_of_constant_series_is_zero() {
        assert_eq!(pearson(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn pearson_of_linear_series_is_one() {
        let r = pearson(&[0.0, 1.0, 2.0, 3.0], &[2.0, 4.0, 6.0, 8.0]);
        assert!((r - 1.0).abs() < 1e-12);
    }
}
