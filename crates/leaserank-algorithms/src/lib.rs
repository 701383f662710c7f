pub mod binning;
pub mod common;
pub mod pagerank;

pub use binning::{chi_merge_bins, chi_square_statistic, quantile_bins};
pub use common::{GraphView, NodeId};
pub use pagerank::{page_rank, PageRankConfig, PowerIterationFailed};
