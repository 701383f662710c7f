//! Feature preparation for the training pipeline
//!
//! Turns the continuous property-value feature into ordinal bins: boundary
//! selection delegates to the configured discretization strategy, and the
//! assignment step labels every record with its interval ordinal.

use crate::config::{BinningConfig, BinningStrategy};
use crate::ingest::TransactionRecord;
use leaserank_algorithms::{chi_merge_bins, quantile_bins};
use tracing::{info, warn};

/// Offset applied below the first boundary so the smallest observed value
/// lands inside the first half-open interval.
const FIRST_BOUNDARY_NUDGE: f64 = 0.001;

/// Compute value bin boundaries with the configured strategy.
pub fn value_bin_boundaries(records: &[TransactionRecord], config: &BinningConfig) -> Vec<f64> {
    let values: Vec<f64> = records.iter().map(|r| r.property_value).collect();
    let boundaries = match config.strategy {
        BinningStrategy::ChiMerge => {
            let labels: Vec<&str> = records.iter().map(|r| r.lessor_kind.as_str()).collect();
            chi_merge_bins(&values, &labels, config.max_bins, config.initial_bins)
        }
        BinningStrategy::Quantile => quantile_bins(&values, config.max_bins),
    };
    info!(
        strategy = ?config.strategy,
        bins = boundaries.len().saturating_sub(1),
        "value boundaries selected"
    );
    boundaries
}

/// Label each record with the 1-based ordinal of the interval holding its
/// property value. Values outside the boundary range stay unlabeled.
pub fn assign_value_bins(records: &mut [TransactionRecord], boundaries: &[f64]) {
    if boundaries.len() < 2 {
        warn!(
            boundaries = boundaries.len(),
            "not enough boundaries to bin values; records left unlabeled"
        );
        for record in records {
            record.value_bin = None;
        }
        return;
    }

    let mut edges = boundaries.to_vec();
    edges[0] -= FIRST_BOUNDARY_NUDGE;
    let last = edges[edges.len() - 1];

    for record in records {
        let value = record.property_value;
        record.value_bin = if value <= edges[0] || value > last {
            None
        } else {
            let interval = edges.partition_point(|&e| e < value);
            Some(interval as u32)
        };
    }
}
