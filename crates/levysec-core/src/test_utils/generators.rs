//! Synthetic return-series generators
//!
//! All generators are deterministic: seeded generators use ChaCha so the
//! same seed reproduces the same draw on every platform, and the
//! deterministic generators are pure mathematical functions. Used by unit
//! tests, the integration suites, and the acceptance test.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draw a standard normal via Box-Muller from a seeded uniform stream.
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Open interval: guards ln(0)
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// i.i.d. N(0, sigma^2) return series from a fixed seed.
pub fn gaussian_series(seed: u64, len: usize, sigma: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| standard_normal(&mut rng) * sigma).collect()
}

/// Two-regime series: N(0, sigma_before^2) for the first half and
/// N(0, sigma_after^2) for the second, with the variance break at the
/// midpoint.
pub fn variance_break_series(seed: u64, len: usize, sigma_before: f64, sigma_after: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half = len / 2;
    (0..len)
        .map(|i| {
            let sigma = if i < half { sigma_before } else { sigma_after };
            standard_normal(&mut rng) * sigma
        })
        .collect()
}

/// Deterministic quasi-periodic return series (no randomness); useful where
/// tests need a fixed, seed-independent input.
pub fn sinusoidal_series(len: usize, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            amplitude * ((t * 0.7).sin() * 0.6 + (t * 0.13).cos() * 0.4)
        })
        .collect()
}
