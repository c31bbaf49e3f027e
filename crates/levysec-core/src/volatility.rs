//! Centered-window realized volatility estimation

use crate::errors::ScaleError;

/// Strictly positive floor applied to every volatility point.
///
/// Guarantees the sectionizer's squared-volatility accumulator always makes
/// progress, so division by zero is never reached downstream.
pub const VOLATILITY_FLOOR: f64 = 1e-10;

/// Minimum number of interior points beyond the window edges.
///
/// A series shorter than `2q + MIN_INTERIOR_POINTS` cannot support a stable
/// local variance estimate at this q.
pub const MIN_INTERIOR_POINTS: usize = 50;

/// Estimate local realized volatility over a centered window of half-width q.
///
/// For each interior index `i` in `[q, n - q)` the volatility is the
/// root-mean-square of the returns in `[i - q, i + q]`. Edge positions where
/// the full window does not fit are dropped, so the output has length
/// `n - 2q` and output index `i` corresponds to series index `i + q`.
///
/// Every emitted value is finite and at least [`VOLATILITY_FLOOR`]; the
/// function is pure.
pub fn estimate(returns: &[f64], q: usize) -> Result<Vec<f64>, ScaleError> {
    let required = 2 * q + MIN_INTERIOR_POINTS;
    if returns.len() < required {
        return Err(ScaleError::InsufficientData {
            len: returns.len(),
            required,
            q,
        });
    }

    let window = 2 * q + 1;
    let volatility = returns
        .windows(window)
        .map(|w| {
            let mean_square = w.iter().map(|r| r * r).sum::<f64>() / window as f64;
            let vol = mean_square.sqrt();
            // NaN never survives: f64::max returns the floor for NaN input
            if vol.is_finite() {
                vol.max(VOLATILITY_FLOOR)
            } else {
                VOLATILITY_FLOOR
            }
        })
        .collect();

    Ok(volatility)
}
