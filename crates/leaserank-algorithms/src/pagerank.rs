//! Weighted PageRank with a uniform restart distribution.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;
use std::fmt;

/// PageRank configuration
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Damping factor (probability of following an edge vs. restarting)
    pub damping_factor: f64,
    /// Maximum number of power iterations before giving up
    pub max_iterations: usize,
    /// L1 convergence tolerance between successive score vectors
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1.0e-6,
        }
    }
}

/// Power iteration did not reach the convergence tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerIterationFailed {
    /// Number of iterations performed
    pub iterations: usize,
}

impl fmt::Display for PowerIterationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "power iteration failed to converge within {} iterations",
            self.iterations
        )
    }
}

impl std::error::Error for PowerIterationFailed {}

/// Calculate weighted PageRank scores for the view.
///
/// Transition probability along an edge is proportional to the edge weight
/// baked into the view. Rank mass sitting on dangling nodes is redistributed
/// over the uniform restart distribution each step, so scores always sum
/// to 1. Iteration stops once the L1 change between successive score
/// vectors drops below `config.tolerance`.
pub fn page_rank(
    view: &GraphView,
    config: &PageRankConfig,
) -> Result<HashMap<NodeId, f64>, PowerIterationFailed> {
    let n = view.node_count();
    if n == 0 {
        return Ok(HashMap::new());
    }

    let restart = 1.0 / n as f64;
    let d = config.damping_factor;
    let base = (1.0 - d) * restart;

    let mut scores = vec![restart; n];
    let mut next_scores = vec![0.0; n];

    for _ in 0..config.max_iterations {
        let dangling_mass: f64 = (0..n)
            .filter(|&i| view.is_dangling(i))
            .map(|i| scores[i])
            .sum();

        let mut total_diff = 0.0;
        for v in 0..n {
            let incoming: f64 = view.incoming(v).map(|(u, p)| scores[u] * p).sum();
            next_scores[v] = base + d * (incoming + dangling_mass * restart);
            total_diff += (next_scores[v] - scores[v]).abs();
        }

        std::mem::swap(&mut scores, &mut next_scores);

        if total_diff < config.tolerance {
            let mut result = HashMap::with_capacity(n);
            for (idx, score) in scores.into_iter().enumerate() {
                result.insert(view.index_to_node[idx], score);
            }
            return Ok(result);
        }
    }

    Err(PowerIterationFailed {
        iterations: config.max_iterations,
    })
}
