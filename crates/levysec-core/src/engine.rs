//! Multi-scale extraction orchestration

use rayon::prelude::*;
use tracing::debug;

use crate::config::MultiScaleConfig;
use crate::cross_scale;
use crate::errors::ConfigError;
use crate::features::{FeatureVector, ScaleFeatureSet};
use crate::section_stats;
use crate::sectionizer;
use crate::volatility;

/// Stateless multi-scale feature engine.
///
/// Construction validates the configuration; after that, extraction is
/// infallible: any per-scale data problem becomes a validity flag in the
/// output, never an error. The engine holds no mutable state and may be
/// shared freely across threads.
pub struct MultiScaleFeatureEngine {
    config: MultiScaleConfig,
}

impl MultiScaleFeatureEngine {
    /// Create an engine, rejecting invalid configurations up front.
    pub fn new(config: MultiScaleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration
    pub fn config(&self) -> &MultiScaleConfig {
        &self.config
    }

    /// Extract one feature vector from a return series.
    ///
    /// Non-finite entries are filtered before processing. The volatility
    /// sequence is computed once per distinct window half-width and shared
    /// across the scales that use it; per-scale results are joined in
    /// canonical tau order regardless of completion order.
    pub fn extract(&self, series: &[f64]) -> FeatureVector {
        let clean: Vec<f64> = series.iter().copied().filter(|r| r.is_finite()).collect();

        debug!(
            n_points = clean.len(),
            n_dropped = series.len() - clean.len(),
            n_scales = self.config.n_scales(),
            "extracting multi-scale features"
        );

        // One volatility estimate per distinct q, shared across scales
        let mut distinct_qs: Vec<usize> = (0..self.config.n_scales())
            .map(|i| self.config.effective_q(i))
            .collect();
        distinct_qs.sort_unstable();
        distinct_qs.dedup();

        let estimates: Vec<(usize, Result<Vec<f64>, crate::ScaleError>)> = distinct_qs
            .into_iter()
            .map(|q| (q, volatility::estimate(&clean, q)))
            .collect();

        let scales: Vec<ScaleFeatureSet> = self
            .config
            .tau_scales
            .par_iter()
            .enumerate()
            .map(|(scale_index, &tau)| {
                let q = self.config.effective_q(scale_index);
                let estimate = &estimates
                    .iter()
                    .find(|(eq, _)| *eq == q)
                    .expect("every effective q has an estimate")
                    .1;

                match estimate {
                    // Series too short at this window: the scale is invalid,
                    // not the extraction
                    Err(_) => ScaleFeatureSet::invalid(tau, 0),
                    Ok(vol) => {
                        let aligned = &clean[q..clean.len() - q];
                        let sections = sectionizer::partition(vol, tau, aligned);
                        section_stats::summarize(
                            &sections,
                            tau,
                            self.config.min_sections,
                            self.config.regime_change_ratio_threshold,
                        )
                    }
                }
            })
            .collect();

        cross_scale::aggregate(scales)
    }

    /// Extract feature vectors for a batch of independent series.
    ///
    /// Data-parallel across series with rayon; output order matches input
    /// order.
    pub fn extract_batch(&self, batch: &[Vec<f64>]) -> Vec<FeatureVector> {
        debug!(n_series = batch.len(), "extracting feature batch");
        batch.par_iter().map(|series| self.extract(series)).collect()
    }
}
