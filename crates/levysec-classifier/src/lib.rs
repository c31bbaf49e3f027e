//! Classifier boundary for the levysec feature engine
//!
//! The engine does not prescribe a model family; it requires any trainable
//! probabilistic binary classifier behind the [`Classifier`] trait, plus
//! the AUC-weighted combination rule when scale-band sub-models are used.

pub mod band;
pub mod ensemble;
pub mod metrics;

pub use band::ScaleBand;
pub use ensemble::AucWeightedEnsemble;
pub use metrics::roc_auc;

use thiserror::Error;

/// Training errors surfaced by classifier implementations and the ensemble.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainError {
    #[error("empty training set")]
    EmptyTrainingSet,

    #[error("row/label length mismatch: {rows} rows, {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("training labels contain a single class; need both positives and negatives")]
    SingleClass,
}

/// Trainable probabilistic binary classifier.
///
/// `fit` consumes dense feature rows (one per series, in the stable
/// [`levysec_core::FeatureVector`] column order, possibly band-masked) with
/// binary labels; `predict_probability` maps one row to a break probability
/// in [0, 1]. Implementations own whatever trained state they need.
pub trait Classifier {
    fn fit(&mut self, rows: &[Vec<f64>], labels: &[u8]) -> Result<(), TrainError>;
    fn predict_probability(&self, row: &[f64]) -> f64;
}
