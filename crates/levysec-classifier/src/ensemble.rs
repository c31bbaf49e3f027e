//! AUC-weighted sub-model ensemble
//!
//! Each sub-model trains on one scale band and earns a weight equal to its
//! held-out ROC-AUC; the ensemble probability is the weighted average of
//! sub-model probabilities with weights re-normalized to sum to 1.

use tracing::info;

use levysec_core::FeatureVector;

use crate::band::ScaleBand;
use crate::metrics::roc_auc;
use crate::{Classifier, TrainError};

struct Member<C: Classifier> {
    band: ScaleBand,
    model: C,
    auc: f64,
}

/// Ensemble of band-specialized classifiers combined by validation AUC.
pub struct AucWeightedEnsemble<C: Classifier> {
    members: Vec<Member<C>>,
}

impl<C: Classifier> AucWeightedEnsemble<C> {
    /// Build an untrained ensemble from (band, model) pairs.
    pub fn new(models: Vec<(ScaleBand, C)>) -> Self {
        let members = models
            .into_iter()
            .map(|(band, model)| Member {
                band,
                model,
                auc: 0.5,
            })
            .collect();
        Self { members }
    }

    /// Conventional three-detector layout: micro, macro, and full-vector
    /// sub-models built from a model factory.
    pub fn standard(mut factory: impl FnMut() -> C) -> Self {
        Self::new(vec![
            (ScaleBand::Micro, factory()),
            (ScaleBand::Macro, factory()),
            (ScaleBand::Full, factory()),
        ])
    }

    /// Train every sub-model on the training split and weight it by its
    /// ROC-AUC on the held-out validation split.
    pub fn fit(
        &mut self,
        train: &[FeatureVector],
        train_labels: &[u8],
        validation: &[FeatureVector],
        validation_labels: &[u8],
    ) -> Result<(), TrainError> {
        if train.is_empty() {
            return Err(TrainError::EmptyTrainingSet);
        }
        if train.len() != train_labels.len() {
            return Err(TrainError::LengthMismatch {
                rows: train.len(),
                labels: train_labels.len(),
            });
        }
        if validation.len() != validation_labels.len() {
            return Err(TrainError::LengthMismatch {
                rows: validation.len(),
                labels: validation_labels.len(),
            });
        }
        if train_labels.iter().all(|&l| l == 1) || train_labels.iter().all(|&l| l == 0) {
            return Err(TrainError::SingleClass);
        }

        for member in &mut self.members {
            let rows: Vec<Vec<f64>> = train.iter().map(|fv| member.band.project(fv)).collect();
            member.model.fit(&rows, train_labels)?;

            let scores: Vec<f64> = validation
                .iter()
                .map(|fv| member.model.predict_probability(&member.band.project(fv)))
                .collect();
            member.auc = roc_auc(validation_labels, &scores);
        }

        info!(
            weights = ?self.weights(),
            "ensemble trained; sub-model weights normalized from validation AUC"
        );
        Ok(())
    }

    /// Normalized sub-model weights (sum to 1).
    pub fn weights(&self) -> Vec<f64> {
        let total: f64 = self.members.iter().map(|m| m.auc).sum();
        if total < f64::EPSILON {
            let uniform = 1.0 / self.members.len() as f64;
            return vec![uniform; self.members.len()];
        }
        self.members.iter().map(|m| m.auc / total).collect()
    }

    /// Weighted-average break probability for one feature vector.
    pub fn predict_probability(&self, features: &FeatureVector) -> f64 {
        let weights = self.weights();
        self.members
            .iter()
            .zip(weights)
            .map(|(member, weight)| {
                weight * member.model.predict_probability(&member.band.project(features))
            })
            .sum()
    }

    /// Validation AUC per sub-model, in construction order.
    pub fn member_aucs(&self) -> Vec<f64> {
        self.members.iter().map(|m| m.auc).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levysec_core::{CrossScaleFeatures, ScaleFeatureSet};

    /// Deterministic stub: scores by one fixed column of its (band-masked)
    /// input, ignoring training.
    struct ColumnStub {
        column: usize,
    }

    impl Classifier for ColumnStub {
        fn fit(&mut self, rows: &[Vec<f64>], labels: &[u8]) -> Result<(), TrainError> {
            if rows.is_empty() {
                return Err(TrainError::EmptyTrainingSet);
            }
            if rows.len() != labels.len() {
                return Err(TrainError::LengthMismatch {
                    rows: rows.len(),
                    labels: labels.len(),
                });
            }
            Ok(())
        }

        fn predict_probability(&self, row: &[f64]) -> f64 {
            row[self.column].clamp(0.0, 1.0)
        }
    }

    fn vector_with_signature(signature: f64) -> FeatureVector {
        let mut cross = CrossScaleFeatures::neutral(5);
        cross.break_signature = signature;
        FeatureVector {
            scales: (0..5)
                .map(|i| ScaleFeatureSet::invalid(0.001 * (i + 1) as f64, 0))
                .collect(),
            cross,
        }
    }

    #[test]
    fn weights_sum_to_one_and_favor_discriminative_models() {
        // The Macro and Full bands include the cross block (where the
        // discriminative signature lives); Micro sees only sentinel columns.
        let signature_col_macro = ScaleBand::Macro.column_indices(5).len() - 1;
        let signature_col_full = ScaleBand::Full.column_indices(5).len() - 1;

        let mut ensemble = AucWeightedEnsemble::new(vec![
            (ScaleBand::Micro, ColumnStub { column: 0 }),
            (ScaleBand::Macro, ColumnStub { column: signature_col_macro }),
            (ScaleBand::Full, ColumnStub { column: signature_col_full }),
        ]);

        let train: Vec<FeatureVector> = (0..8)
            .map(|i| vector_with_signature(if i < 4 { 0.1 } else { 0.9 }))
            .collect();
        let train_labels = [0, 0, 0, 0, 1, 1, 1, 1];
        let validation = train.clone();

        ensemble
            .fit(&train, &train_labels, &validation, &train_labels)
            .unwrap();

        let weights = ensemble.weights();
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);

        let aucs = ensemble.member_aucs();
        // Micro stub scores a constant sentinel column: chance level
        assert!((aucs[0] - 0.5).abs() < 1e-12);
        // Signature-reading stubs separate perfectly
        assert!((aucs[1] - 1.0).abs() < 1e-12);
        assert!((aucs[2] - 1.0).abs() < 1e-12);
        assert!(weights[1] > weights[0]);
    }

    #[test]
    fn prediction_is_weighted_average_in_unit_interval() {
        let mut ensemble = AucWeightedEnsemble::standard(|| ColumnStub { column: 0 });
        let train: Vec<FeatureVector> = (0..4)
            .map(|i| vector_with_signature(i as f64 * 0.3))
            .collect();
        ensemble
            .fit(&train, &[0, 0, 1, 1], &train, &[0, 0, 1, 1])
            .unwrap();

        let p = ensemble.predict_probability(&vector_with_signature(0.4));
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn single_class_training_fails() {
        let mut ensemble = AucWeightedEnsemble::standard(|| ColumnStub { column: 0 });
        let train = vec![vector_with_signature(0.5); 3];
        let err = ensemble
            .fit(&train, &[1, 1, 1], &train, &[1, 1, 1])
            .unwrap_err();
        assert_eq!(err, TrainError::SingleClass);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut ensemble = AucWeightedEnsemble::standard(|| ColumnStub { column: 0 });
        let train = vec![vector_with_signature(0.5); 3];
        let err = ensemble
            .fit(&train, &[0, 1], &train, &[0, 1, 0])
            .unwrap_err();
        assert_eq!(err, TrainError::LengthMismatch { rows: 3, labels: 2 });
    }
}
