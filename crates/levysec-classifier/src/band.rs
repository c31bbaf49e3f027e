//! Scale-band feature masks
//!
//! Sub-models specialize on slices of the feature schema: one sees only
//! micro-scale columns, one sees macro-scale plus interaction columns, one
//! sees everything. Bands index into the stable
//! [`FeatureVector`](levysec_core::FeatureVector) column order.

use levysec_core::{CrossScaleFeatures, FeatureVector, ScaleFeatureSet};
use serde::{Deserialize, Serialize};

/// Which slice of the feature schema a sub-model trains on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleBand {
    /// Lower half of the tau ladder (finest scales)
    Micro,
    /// Upper half of the tau ladder plus the cross-scale block
    Macro,
    /// The full feature vector
    Full,
}

impl ScaleBand {
    /// Column indices into the dense feature row for `n_scales` scales.
    pub fn column_indices(&self, n_scales: usize) -> Vec<usize> {
        let scale_width = ScaleFeatureSet::FIELD_NAMES.len();
        let cross_width = CrossScaleFeatures::FIELD_NAMES.len();
        let total = n_scales * scale_width + cross_width;

        let scale_block = |s: usize| (s * scale_width)..((s + 1) * scale_width);

        match self {
            ScaleBand::Full => (0..total).collect(),
            ScaleBand::Micro => (0..n_scales / 2).flat_map(scale_block).collect(),
            ScaleBand::Macro => {
                let mut columns: Vec<usize> = (n_scales.div_ceil(2)..n_scales)
                    .flat_map(scale_block)
                    .collect();
                columns.extend(n_scales * scale_width..total);
                columns
            }
        }
    }

    /// Project a feature vector onto this band's columns.
    pub fn project(&self, features: &FeatureVector) -> Vec<f64> {
        let values = features.values();
        self.column_indices(features.scales.len())
            .into_iter()
            .map(|c| values[c])
            .collect()
    }
}
