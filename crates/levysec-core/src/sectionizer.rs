//! Lévy time-change partitioning
//!
//! Walks a volatility sequence left to right, accumulating squared
//! volatility since the last boundary, and closes a section whenever the
//! accumulator first reaches tau. Under the null of a single regime the
//! per-section return sums, scaled by sqrt(tau), should look i.i.d.
//! Gaussian; departures are the structural-break signal.

/// One contiguous variance-normalized section of the volatility sequence.
///
/// Immutable once emitted. `start` and `duration` index into the volatility
/// sequence (i.e. interior positions; add q to recover series indices).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevySection {
    /// First volatility index covered by this section
    pub start: usize,

    /// Number of volatility points consumed (always >= 1)
    pub duration: usize,

    /// Sum of the raw returns aligned to this section's span
    pub return_sum: f64,
}

/// Partition a volatility sequence into Lévy sections at one tau scale.
///
/// `aligned_returns` must be the interior return slice aligned to
/// `volatility` (same length; element i backs volatility point i).
///
/// A trailing partial accumulation that never reaches tau is discarded
/// rather than emitted as a short section, so truncation cannot bias the
/// duration statistics.
///
/// Invariants: every emitted duration is >= 1, and the durations sum to at
/// most `volatility.len()`.
pub fn partition(volatility: &[f64], tau: f64, aligned_returns: &[f64]) -> Vec<LevySection> {
    debug_assert_eq!(volatility.len(), aligned_returns.len());

    let mut sections = Vec::new();
    let mut accumulated = 0.0;
    let mut return_sum = 0.0;
    let mut start = 0;

    for (i, (&vol, &ret)) in volatility.iter().zip(aligned_returns).enumerate() {
        accumulated += vol * vol;
        return_sum += ret;

        if accumulated >= tau {
            sections.push(LevySection {
                start,
                duration: i - start + 1,
                return_sum,
            });
            start = i + 1;
            accumulated = 0.0;
            return_sum = 0.0;
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_volatility_gives_uniform_durations() {
        // vol^2 = 0.01 per point, tau = 0.05 -> sections of exactly 5 points
        let volatility = vec![0.1; 23];
        let returns = vec![1.0; 23];
        let sections = partition(&volatility, 0.05, &returns);

        assert_eq!(sections.len(), 4);
        for section in &sections {
            assert_eq!(section.duration, 5);
            assert!((section.return_sum - 5.0).abs() < 1e-12);
        }
        // 3 leftover points never reach tau and are discarded
        let consumed: usize = sections.iter().map(|s| s.duration).sum();
        assert_eq!(consumed, 20);
    }

    #[test]
    fn truncated_tail_is_discarded() {
        let volatility = vec![0.1; 4];
        let returns = vec![0.5; 4];
        // tau needs 5 points; nothing is ever emitted
        let sections = partition(&volatility, 0.05, &returns);
        assert!(sections.is_empty());
    }

    #[test]
    fn single_spike_closes_section_immediately() {
        let volatility = vec![0.001, 0.001, 1.0, 0.001, 0.001];
        let returns = vec![0.1; 5];
        let sections = partition(&volatility, 0.5, &returns);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start, 0);
        assert_eq!(sections[0].duration, 3);
    }

    #[test]
    fn sections_are_contiguous_and_positive() {
        let volatility: Vec<f64> = (0..200)
            .map(|i| 0.01 + ((i as f64) * 0.3).sin().abs() * 0.05)
            .collect();
        let returns = vec![0.001; 200];
        let sections = partition(&volatility, 0.002, &returns);

        assert!(!sections.is_empty());
        let mut expected_start = 0;
        for section in &sections {
            assert!(section.duration >= 1);
            assert_eq!(section.start, expected_start);
            expected_start = section.start + section.duration;
        }
        assert!(expected_start <= volatility.len());
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(partition(&[], 0.01, &[]).is_empty());
    }
}
