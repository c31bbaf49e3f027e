//! Fixed-schema feature types
//!
//! The schema is a pure function of the configured scale count: every
//! per-scale field is present for every scale (sentinels when invalid) and
//! every cross-scale field is always present, so downstream tabular
//! consumers get a stable column set.

use serde::{Deserialize, Serialize};

/// Sentinel written into magnitude-bearing statistics of an invalid scale,
/// so "no signal" stays distinguishable from "weak signal".
pub const SENTINEL: f64 = -1.0;

/// Per-scale descriptive statistics of the Lévy-section durations and sums.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleFeatureSet {
    /// Tau scale this set was computed at
    pub tau: f64,

    /// False when the scale produced fewer than `min_sections` sections
    /// (or the series was too short for its window)
    pub valid: bool,

    /// Section count actually produced (0 when the estimator rejected the
    /// series outright)
    pub n_sections: usize,

    /// Mean section duration in volatility points
    pub duration_mean: f64,

    /// Population standard deviation of durations
    pub duration_std: f64,

    /// Coefficient of variation (std / mean)
    pub duration_cv: f64,

    /// Shortest section duration
    pub duration_min: f64,

    /// Longest section duration
    pub duration_max: f64,

    /// Fisher-Pearson skewness of durations
    pub duration_skew: f64,

    /// Excess kurtosis of durations (normal = 0)
    pub duration_kurtosis: f64,

    /// Count of adjacent duration pairs whose ratio exceeds the configured
    /// threshold in either direction
    pub regime_changes: f64,

    /// Absolute excess kurtosis of the tau-normalized section sums
    /// (sum / sqrt(tau)); closer to 0 means closer to the Gaussian
    /// prediction of the time-change theory
    pub sum_norm_kurtosis: f64,
}

impl ScaleFeatureSet {
    /// Sentinel-filled set for a scale that produced no usable signal.
    pub fn invalid(tau: f64, n_sections: usize) -> Self {
        Self {
            tau,
            valid: false,
            n_sections,
            duration_mean: SENTINEL,
            duration_std: SENTINEL,
            duration_cv: SENTINEL,
            duration_min: SENTINEL,
            duration_max: SENTINEL,
            duration_skew: SENTINEL,
            duration_kurtosis: SENTINEL,
            regime_changes: SENTINEL,
            sum_norm_kurtosis: SENTINEL,
        }
    }

    /// Per-scale field names, in row order (without the scale suffix)
    pub const FIELD_NAMES: [&'static str; 11] = [
        "levy_valid",
        "levy_n_sections",
        "levy_duration_mean",
        "levy_duration_std",
        "levy_duration_cv",
        "levy_duration_min",
        "levy_duration_max",
        "levy_duration_skew",
        "levy_duration_kurtosis",
        "levy_regime_changes",
        "levy_sum_norm_kurtosis",
    ];

    /// Field values in the same order as [`Self::FIELD_NAMES`]
    pub fn field_values(&self) -> [f64; 11] {
        [
            if self.valid { 1.0 } else { 0.0 },
            self.n_sections as f64,
            self.duration_mean,
            self.duration_std,
            self.duration_cv,
            self.duration_min,
            self.duration_max,
            self.duration_skew,
            self.duration_kurtosis,
            self.regime_changes,
            self.sum_norm_kurtosis,
        ]
    }
}

/// Interaction features computed across the valid subset of scales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossScaleFeatures {
    /// Number of scales that produced a valid feature set
    pub n_valid_scales: usize,

    /// Pearson correlation between canonical scale index and mean duration;
    /// expected positive under a single stationary regime
    pub scale_correlation: f64,

    /// Largest-scale mean duration / smallest-scale mean duration
    /// (over valid scales)
    pub extreme_scale_ratio: f64,

    /// Dispersion of mean durations across scales, normalized by their
    /// average
    pub cross_scale_cv: f64,

    /// Change in coefficient of variation from the smallest to the largest
    /// valid scale (instability propagation)
    pub cv_propagation: f64,

    /// Macro-scale mean duration / micro-scale mean duration
    pub break_signature: f64,
}

impl CrossScaleFeatures {
    /// Neutral defaults used when fewer than 2 scales are valid:
    /// 0 for correlations/differences, 1 for ratios.
    pub fn neutral(n_valid_scales: usize) -> Self {
        Self {
            n_valid_scales,
            scale_correlation: 0.0,
            extreme_scale_ratio: 1.0,
            cross_scale_cv: 0.0,
            cv_propagation: 0.0,
            break_signature: 1.0,
        }
    }

    /// Cross-scale field names, in row order
    pub const FIELD_NAMES: [&'static str; 6] = [
        "levy_n_valid_scales",
        "levy_scale_correlation",
        "levy_extreme_scale_ratio",
        "levy_cross_scale_cv",
        "levy_cv_propagation",
        "levy_break_signature",
    ];

    /// Field values in the same order as [`Self::FIELD_NAMES`]
    pub fn field_values(&self) -> [f64; 6] {
        [
            self.n_valid_scales as f64,
            self.scale_correlation,
            self.extreme_scale_ratio,
            self.cross_scale_cv,
            self.cv_propagation,
            self.break_signature,
        ]
    }
}

/// The complete per-series feature vector: one [`ScaleFeatureSet`] per
/// configured tau scale (canonical order) plus the interaction block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    /// Per-scale blocks, in canonical tau order
    pub scales: Vec<ScaleFeatureSet>,

    /// Cross-scale interaction block
    pub cross: CrossScaleFeatures,
}

impl FeatureVector {
    /// Stable column names for a given scale count, e.g.
    /// `levy_duration_mean_s1` .. plus the cross-scale block.
    pub fn feature_names(n_scales: usize) -> Vec<String> {
        let mut names =
            Vec::with_capacity(n_scales * ScaleFeatureSet::FIELD_NAMES.len() + CrossScaleFeatures::FIELD_NAMES.len());
        for scale in 0..n_scales {
            for field in ScaleFeatureSet::FIELD_NAMES {
                names.push(format!("{}_s{}", field, scale + 1));
            }
        }
        for field in CrossScaleFeatures::FIELD_NAMES {
            names.push(field.to_string());
        }
        names
    }

    /// Dense values in the [`Self::feature_names`] order.
    pub fn values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.len());
        for scale in &self.scales {
            values.extend_from_slice(&scale.field_values());
        }
        values.extend_from_slice(&self.cross.field_values());
        values
    }

    /// Named `(column, value)` rows, suitable for direct tabular use.
    pub fn rows(&self) -> Vec<(String, f64)> {
        Self::feature_names(self.scales.len())
            .into_iter()
            .zip(self.values())
            .collect()
    }

    /// Total feature count
    pub fn len(&self) -> usize {
        self.scales.len() * ScaleFeatureSet::FIELD_NAMES.len() + CrossScaleFeatures::FIELD_NAMES.len()
    }

    /// True when no scale block is present (never produced by the engine)
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
