//! Engine error types

use thiserror::Error;

/// Per-scale extraction errors.
///
/// Only conditions that abort a single scale's computation live here. A
/// degenerate scale (fewer than `min_sections` sections) is an ordinary,
/// informative outcome and is reported through the `valid` flag on
/// [`crate::ScaleFeatureSet`] instead of an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("insufficient data: {len} points, need at least {required} (2q + 50 with q = {q})")]
    InsufficientData {
        len: usize,
        required: usize,
        q: usize,
    },
}

/// Configuration validation errors.
///
/// All of these indicate programmer error and are surfaced before any
/// computation starts; nothing here is recoverable at extraction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tau_scales is empty")]
    EmptyTauScales,

    #[error("tau_scales[{index}] = {tau} is not a positive finite number")]
    NonPositiveTau { index: usize, tau: f64 },

    #[error("tau_scales must be strictly increasing: tau_scales[{index}] does not exceed its predecessor")]
    NonIncreasingTauScales { index: usize },

    #[error("window half-width q must be positive")]
    ZeroWindow,

    #[error("q_overrides has {actual} entries but {expected} tau scales are configured")]
    WindowOverrideMismatch { expected: usize, actual: usize },

    #[error("min_sections must be positive")]
    ZeroMinSections,

    #[error("regime_change_ratio_threshold = {threshold} must be a finite number > 1")]
    InvalidRegimeRatio { threshold: f64 },
}
