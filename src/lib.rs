//! Leaserank — lessor recommendation engine for financial leasing
//!
//! Recommends counterparties for a lessee cohort selected by province or
//! industry. A training cycle cleans transaction exports, discretizes the
//! property-value feature, builds an immutable directed weighted graph of
//! lessee→lessor transactions, and persists everything as one versioned
//! snapshot. Serving extracts per-query induced subgraphs and ranks their
//! lessors with weighted PageRank, crossed over two filters and two edge
//! weights into four sub-rankings.
//!
//! # Example
//!
//! ```rust
//! use leaserank::graph::{EdgeWeight, Subgraph, TransactionGraph};
//! use leaserank::ingest::TransactionRecord;
//! use leaserank::ranking::{self, RankingConfig};
//!
//! let records = vec![TransactionRecord {
//!     lessee: "L1".into(),
//!     lessor: "R1".into(),
//!     lessee_province: "Shandong".into(),
//!     lessor_province: "Jiangsu".into(),
//!     industry: "Agriculture".into(),
//!     property_value: 500.0,
//!     lessor_kind: "private".into(),
//!     value_bin: None,
//! }];
//!
//! let graph = TransactionGraph::build(&records);
//! let subgraph = Subgraph::by_province(&graph, "Shandong");
//! let ranked = ranking::rank(&subgraph, EdgeWeight::Count, &RankingConfig::default());
//! assert_eq!(ranked, vec!["R1"]);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod features;
pub mod graph;
pub mod http;
pub mod ingest;
pub mod persistence;
pub mod ranking;
pub mod recommend;

// Re-export main types for convenience
pub use config::{BinningConfig, BinningStrategy, Config, HttpConfig};
pub use graph::{
    Edge, EdgeWeight, Industry, Node, NodeId, NodeKind, Province, Subgraph, TransactionGraph,
};
pub use ingest::{IngestError, TransactionRecord};
pub use persistence::{GraphSnapshot, SnapshotError, SNAPSHOT_FORMAT_VERSION};
pub use ranking::RankingConfig;
pub use recommend::{QueryOptions, RankedList, RecommendationSet, Recommender};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
