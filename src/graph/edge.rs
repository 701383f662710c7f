//! Edge implementation for the transaction graph

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A directed, aggregated edge from a lessee to a lessor.
///
/// At most one edge exists per (lessee, lessor) pair; repeated transactions
/// between the same parties update the aggregates of that single edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Lessee node (edge goes FROM this node)
    pub source: NodeId,
    /// Lessor node (edge goes TO this node)
    pub target: NodeId,
    /// Number of transactions between the pair, >= 1
    pub count: u64,
    /// Sum of property values across those transactions, >= 0
    pub total_value: f64,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, count: u64, total_value: f64) -> Self {
        Edge {
            source,
            target,
            count,
            total_value,
        }
    }
}

/// Selector for the edge attribute used as a ranking weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeWeight {
    /// Transaction count
    Count,
    /// Total transaction value
    TotalValue,
}

impl EdgeWeight {
    /// Extract the selected weight from an edge
    pub fn of(&self, edge: &Edge) -> f64 {
        match self {
            EdgeWeight::Count => edge.count as f64,
            EdgeWeight::TotalValue => edge.total_value,
        }
    }

    /// Stable name for logging and result labels
    pub fn key(&self) -> &'static str {
        match self {
            EdgeWeight::Count => "count",
            EdgeWeight::TotalValue => "total_value",
        }
    }
}
