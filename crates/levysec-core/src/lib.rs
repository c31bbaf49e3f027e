//! Core multi-scale Lévy-sections feature extraction
//!
//! Partitions a return series into variance-normalized sections at several
//! tau resolutions and condenses their duration/sum statistics into one
//! fixed-schema feature vector for structural-break classification.
//!
//! ## Guarantees
//!
//! - Pure pipeline: the same (series, configuration) pair always produces
//!   the identical feature vector
//! - No NaN/Inf in any emitted feature; degenerate scales are flagged, not
//!   raised
//! - Feature schema is a pure function of the configured scale count,
//!   stable regardless of per-scale validity

pub mod cache;
pub mod config;
pub mod cross_scale;
pub mod engine;
pub mod errors;
pub mod features;
pub mod section_stats;
pub mod sectionizer;
pub mod volatility;

// Test utilities (only available in test builds or with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types
pub use cache::{CachedExtractor, FeatureCache, InMemoryFeatureCache};
pub use config::MultiScaleConfig;
pub use engine::MultiScaleFeatureEngine;
pub use errors::{ConfigError, ScaleError};
pub use features::{CrossScaleFeatures, FeatureVector, ScaleFeatureSet};
pub use sectionizer::LevySection;
pub use volatility::VOLATILITY_FLOOR;
