//! Chi-merge discretization of a continuous feature.
//!
//! Hybrid scheme: coarse quantile pre-binning keeps the merge loop small,
//! then adjacent bins are merged bottom-up while the chi-square statistic
//! of the candidate pair stays the smallest among all pairs. Low statistic
//! means the two bins have near-identical label distributions, so merging
//! them loses no discriminative power.

use ndarray::{Array2, Axis};
use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Below this input size a serial sort beats the rayon fork overhead.
const PARALLEL_SORT_MIN: usize = 4096;

/// Quantile-only binning: the fast, unsupervised path.
///
/// Returns the deduplicated quantile cut points of `values`, an ascending
/// boundary sequence defining at most `bins` intervals.
pub fn quantile_bins(values: &[f64], bins: usize) -> Vec<f64> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let sorted = sorted_copy(values);
    quantile_edges(&sorted, bins)
}

/// Chi-merge binning of `values` against the categorical `labels`.
///
/// Pre-bins by quantiles (falling back to equal-width cuts when ties leave
/// too few distinct edges), then repeatedly merges the adjacent bin pair
/// with the smallest chi-square statistic until at most `max_bins` bins
/// remain or no candidate pair has a defined statistic.
///
/// The returned boundary sequence is strictly increasing; the first
/// boundary equals the observed minimum, so callers wanting the minimum
/// inside the first half-open interval must nudge it down themselves.
pub fn chi_merge_bins<L: Hash + Eq>(
    values: &[f64],
    labels: &[L],
    max_bins: usize,
    initial_bins: usize,
) -> Vec<f64> {
    if values.is_empty() || labels.is_empty() || initial_bins == 0 {
        return Vec::new();
    }

    let sorted = sorted_copy(values);
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    if min == max {
        return vec![min];
    }

    let mut edges = quantile_edges(&sorted, initial_bins);
    if edges.len() < initial_bins + 1 {
        edges = equal_width_edges(min, max, initial_bins);
    }

    // Dense-encode labels; column order is first-seen but irrelevant to
    // the statistic.
    let mut label_index: HashMap<&L, usize> = HashMap::new();
    for label in labels {
        let next = label_index.len();
        label_index.entry(label).or_insert(next);
    }
    let n_labels = label_index.len();

    // One contingency row and observed [min, max] interval per coarse bin;
    // bins that received no samples are dropped outright.
    let n_coarse = edges.len() - 1;
    let mut counts = vec![vec![0.0f64; n_labels]; n_coarse];
    let mut spans: Vec<Option<(f64, f64)>> = vec![None; n_coarse];
    for (&value, label) in values.iter().zip(labels.iter()) {
        let bin = bin_index(&edges, value);
        counts[bin][label_index[label]] += 1.0;
        let span = spans[bin].get_or_insert((value, value));
        span.0 = span.0.min(value);
        span.1 = span.1.max(value);
    }
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n_coarse);
    let mut intervals: Vec<(f64, f64)> = Vec::with_capacity(n_coarse);
    for (row, span) in counts.into_iter().zip(spans) {
        if let Some(span) = span {
            rows.push(row);
            intervals.push(span);
        }
    }

    while rows.len() > max_bins {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..rows.len() - 1 {
            let Some(chi2) = stacked_statistic(&rows[i], &rows[i + 1]) else {
                continue;
            };
            if best.map_or(true, |(_, min_chi2)| chi2 < min_chi2) {
                best = Some((i, chi2));
            }
        }
        // No pair with a defined statistic: stop with more bins than asked
        let Some((merge_idx, _)) = best else { break };

        let absorbed = rows.remove(merge_idx + 1);
        for (cell, extra) in rows[merge_idx].iter_mut().zip(absorbed) {
            *cell += extra;
        }
        let right = intervals.remove(merge_idx + 1);
        intervals[merge_idx].1 = right.1;
    }

    let mut boundaries: Vec<f64> = intervals.iter().map(|&(left, _)| left).collect();
    if let Some(&(_, right)) = intervals.last() {
        boundaries.push(right);
    }
    boundaries.sort_unstable_by(f64::total_cmp);
    boundaries.dedup();
    boundaries
}

/// Chi-square statistic of a contingency table against the row/column
/// independence expectation.
///
/// Returns `None` when the statistic is undefined: an empty table, or any
/// zero row/column marginal (a zero marginal yields a zero expected
/// frequency).
pub fn chi_square_statistic(table: &Array2<f64>) -> Option<f64> {
    let total = table.sum();
    if total <= 0.0 {
        return None;
    }
    let row_sums = table.sum_axis(Axis(1));
    let col_sums = table.sum_axis(Axis(0));
    if row_sums.iter().any(|&s| s == 0.0) || col_sums.iter().any(|&s| s == 0.0) {
        return None;
    }

    let mut chi2 = 0.0;
    for (i, row) in table.rows().into_iter().enumerate() {
        for (j, &observed) in row.iter().enumerate() {
            let expected = row_sums[i] * col_sums[j] / total;
            let diff = observed - expected;
            chi2 += diff * diff / expected;
        }
    }
    Some(chi2)
}

/// Statistic of the 2-row table stacking two adjacent contingency rows.
fn stacked_statistic(upper: &[f64], lower: &[f64]) -> Option<f64> {
    let k = upper.len();
    let mut cells = Vec::with_capacity(2 * k);
    cells.extend_from_slice(upper);
    cells.extend_from_slice(lower);
    let table = Array2::from_shape_vec((2, k), cells).ok()?;
    chi_square_statistic(&table)
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    if sorted.len() >= PARALLEL_SORT_MIN {
        sorted.par_sort_unstable_by(f64::total_cmp);
    } else {
        sorted.sort_unstable_by(f64::total_cmp);
    }
    sorted
}

/// Linear-interpolation quantile cut points over sorted input, deduplicated.
fn quantile_edges(sorted: &[f64], bins: usize) -> Vec<f64> {
    let n = sorted.len();
    let mut edges = Vec::with_capacity(bins + 1);
    for i in 0..=bins {
        let pos = i as f64 * (n - 1) as f64 / bins as f64;
        let lo = pos.floor() as usize;
        let frac = pos - lo as f64;
        let edge = if lo + 1 < n {
            sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
        } else {
            sorted[lo]
        };
        edges.push(edge);
    }
    edges.dedup();
    edges
}

fn equal_width_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let width = (max - min) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| min + i as f64 * width).collect();
    edges.dedup();
    edges
}

/// Index of the half-open interval `(edges[i], edges[i+1]]` holding `value`;
/// the first interval also includes its left edge.
fn bin_index(edges: &[f64], value: f64) -> usize {
    let upper = edges.len() - 1;
    edges.partition_point(|&e| e < value).clamp(1, upper) - 1
}
