//! Discrimination metrics

/// ROC-AUC via the Mann-Whitney rank formulation.
///
/// Labels are binary (1 = break). Tied scores receive average ranks, so
/// ties contribute 0.5 per pair. Degenerate label sets (single class)
/// return the chance level 0.5 rather than erroring, since an AUC weight
/// of 0.5 is the correct "no information" contribution downstream.
pub fn roc_auc(labels: &[u8], scores: &[f64]) -> f64 {
    debug_assert_eq!(labels.len(), scores.len());

    let n = labels.len();
    let n_pos = labels.iter().filter(|&&l| l == 1).count();
    let n_neg = n - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return 0.5;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    // Average ranks over tie groups (1-based)
    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        let average_rank = (i + j) as f64 / 2.0 + 1.0;
        for k in i..=j {
            ranks[order[k]] = average_rank;
        }
        i = j + 1;
    }

    let positive_rank_sum: f64 = labels
        .iter()
        .zip(&ranks)
        .filter(|(&label, _)| label == 1)
        .map(|(_, &rank)| rank)
        .sum();

    let u = positive_rank_sum - (n_pos * (n_pos + 1)) as f64 / 2.0;
    u / (n_pos * n_neg) as f64
}
