//! Multi-scale extraction configuration

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// One multi-scale configuration: the ordered tau ladder plus the shared
/// estimation parameters.
///
/// `tau_scales` must be strictly increasing (micro to macro by convention);
/// each tau is the cumulative squared-volatility budget that closes one
/// Lévy section. A typical ladder spans roughly two orders of magnitude.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiScaleConfig {
    /// Ordered variance budgets, one per resolution scale
    pub tau_scales: Vec<f64>,

    /// Half-width of the centered realized-volatility window
    pub q: usize,

    /// Optional per-scale half-width overrides (same length as `tau_scales`).
    /// Most configurations share one `q`; overrides exist for ladders that
    /// mix very fine and very coarse scales.
    #[serde(default)]
    pub q_overrides: Option<Vec<usize>>,

    /// Minimum section count below which a scale is flagged invalid
    pub min_sections: usize,

    /// Adjacent-duration ratio (either direction) counted as a regime change
    pub regime_change_ratio_threshold: f64,
}

impl Default for MultiScaleConfig {
    fn default() -> Self {
        Self {
            tau_scales: vec![0.0001, 0.0005, 0.001, 0.005, 0.01],
            q: 20,
            q_overrides: None,
            min_sections: 3,
            regime_change_ratio_threshold: 2.0,
        }
    }
}

impl MultiScaleConfig {
    /// Validate the configuration before any extraction starts.
    ///
    /// Every violation here is programmer error, never a data condition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tau_scales.is_empty() {
            return Err(ConfigError::EmptyTauScales);
        }

        for (index, &tau) in self.tau_scales.iter().enumerate() {
            if !tau.is_finite() || tau <= 0.0 {
                return Err(ConfigError::NonPositiveTau { index, tau });
            }
            if index > 0 && tau <= self.tau_scales[index - 1] {
                return Err(ConfigError::NonIncreasingTauScales { index });
            }
        }

        if self.q == 0 {
            return Err(ConfigError::ZeroWindow);
        }

        if let Some(overrides) = &self.q_overrides {
            if overrides.len() != self.tau_scales.len() {
                return Err(ConfigError::WindowOverrideMismatch {
                    expected: self.tau_scales.len(),
                    actual: overrides.len(),
                });
            }
            if overrides.contains(&0) {
                return Err(ConfigError::ZeroWindow);
            }
        }

        if self.min_sections == 0 {
            return Err(ConfigError::ZeroMinSections);
        }

        let ratio = self.regime_change_ratio_threshold;
        if !ratio.is_finite() || ratio <= 1.0 {
            return Err(ConfigError::InvalidRegimeRatio { threshold: ratio });
        }

        Ok(())
    }

    /// Number of configured scales
    pub fn n_scales(&self) -> usize {
        self.tau_scales.len()
    }

    /// Effective window half-width for a scale index
    pub fn effective_q(&self, scale_index: usize) -> usize {
        self.q_overrides
            .as_ref()
            .map(|qs| qs[scale_index])
            .unwrap_or(self.q)
    }

    /// Stable 64-bit hash over the full parameter set, for cache keys.
    ///
    /// FNV-1a over the canonical bit patterns, so two configs hash equal
    /// exactly when they would extract identical feature vectors.
    pub fn config_hash(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = FNV_OFFSET;
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                hash ^= b as u64;
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        };

        for &tau in &self.tau_scales {
            mix(&tau.to_bits().to_le_bytes());
        }
        mix(&(self.q as u64).to_le_bytes());
        match &self.q_overrides {
            None => mix(&[0]),
            Some(qs) => {
                mix(&[1]);
                for &q in qs {
                    mix(&(q as u64).to_le_bytes());
                }
            }
        }
        mix(&(self.min_sections as u64).to_le_bytes());
        mix(&self.regime_change_ratio_threshold.to_bits().to_le_bytes());

        hash
    }
}
