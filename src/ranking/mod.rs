//! Weighted PageRank ranking over induced subgraphs
//!
//! Adapter between the graph model and the dense algorithm kernel:
//! projects a subgraph onto a `GraphView` for the chosen edge weight, runs
//! power iteration, and turns the scores into an ordered lessor list.

use crate::graph::{EdgeWeight, Subgraph};
use leaserank_algorithms::{page_rank, GraphView, PageRankConfig};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

/// Ranking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// PageRank damping factor
    pub damping_factor: f64,
    /// L1 convergence tolerance
    pub tolerance: f64,
    /// Iteration cap before a sub-ranking is abandoned
    pub max_iterations: usize,
    /// Maximum number of lessors returned per sub-ranking
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 1.0e-6,
            max_iterations: 100,
            top_n: 10,
        }
    }
}

/// Rank the lessors of a subgraph by weighted PageRank score.
///
/// Returns at most `config.top_n` lessor identifiers, best first. Equal
/// scores are ordered by ascending identifier so repeated calls are
/// reproducible. A subgraph without edges, or one whose power iteration
/// hits the iteration cap, yields an empty list; non-convergence is
/// reported as a warning, never an error.
pub fn rank(subgraph: &Subgraph<'_>, weight: EdgeWeight, config: &RankingConfig) -> Vec<String> {
    if subgraph.edge_count() == 0 {
        return Vec::new();
    }

    let node_ids: Vec<u64> = subgraph.nodes().map(|n| n.id.as_u64()).collect();
    let edges: Vec<(u64, u64, f64)> = subgraph
        .edges()
        .map(|e| (e.source.as_u64(), e.target.as_u64(), weight.of(e)))
        .collect();
    let view = GraphView::from_weighted_edges(&node_ids, &edges);

    let pr_config = PageRankConfig {
        damping_factor: config.damping_factor,
        max_iterations: config.max_iterations,
        tolerance: config.tolerance,
    };
    let scores = match page_rank(&view, &pr_config) {
        Ok(scores) => scores,
        Err(err) => {
            warn!(
                weight = weight.key(),
                %err,
                "PageRank did not converge; returning empty ranking"
            );
            return Vec::new();
        }
    };

    let mut candidates: Vec<(&str, f64)> = subgraph
        .nodes()
        .filter(|n| n.is_lessor())
        .map(|n| {
            let score = scores.get(&n.id.as_u64()).copied().unwrap_or(0.0);
            (n.party.as_str(), score)
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    candidates.truncate(config.top_n);
    candidates
        .into_iter()
        .map(|(party, _)| party.to_string())
        .collect()
}
