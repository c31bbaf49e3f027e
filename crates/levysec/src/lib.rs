//! Multi-scale Lévy-sections feature extraction for structural-break
//! detection in financial time series.
//!
//! Given a return series, the engine partitions it at several variance
//! resolutions into variance-normalized sections (the discrete analogue of
//! Lévy's time change), summarizes each scale's section durations and sums,
//! and combines the scales into one fixed-schema feature vector for a
//! trainable break classifier.
//!
//! ## Meta-Crate
//!
//! This crate re-exports the levysec sub-crates. New code may depend on the
//! specific sub-crates directly:
//!
//! - `levysec-core` - Extraction engine and feature types
//! - `levysec-config` - Configuration management
//! - `levysec-classifier` - Classifier boundary and AUC-weighted ensembling
//!
//! ## Basic Usage
//!
//! ```rust
//! use levysec::{MultiScaleConfig, MultiScaleFeatureEngine};
//!
//! let engine = MultiScaleFeatureEngine::new(MultiScaleConfig::default()).unwrap();
//!
//! let returns = vec![0.001; 600]; // caller-supplied return series
//! let features = engine.extract(&returns);
//!
//! // Stable tabular rows, one column per feature
//! for (name, value) in features.rows() {
//!     assert!(value.is_finite(), "{name} must be finite");
//! }
//! ```

// Re-export core (always available)
pub use levysec_core as core;

// Re-export optional crates
#[cfg(feature = "config")]
pub use levysec_config as config;

#[cfg(feature = "classifier")]
pub use levysec_classifier as classifier;

// Re-export commonly used types at crate root for convenience
pub use levysec_core::{
    CachedExtractor, ConfigError, CrossScaleFeatures, FeatureCache, FeatureVector,
    InMemoryFeatureCache, LevySection, MultiScaleConfig, MultiScaleFeatureEngine, ScaleError,
    ScaleFeatureSet,
};

#[cfg(feature = "config")]
pub use levysec_config::Settings;

#[cfg(feature = "classifier")]
pub use levysec_classifier::{AucWeightedEnsemble, Classifier, ScaleBand, TrainError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
