//! Induced subgraph extraction for province and industry queries

use super::edge::Edge;
use super::node::Node;
use super::store::TransactionGraph;
use super::types::NodeId;
use rustc_hash::FxHashSet;

/// A read-only view over a filtered slice of the global graph.
///
/// Contains the lessees matching a filter plus every lessor one outgoing
/// hop away, and exactly the global edges with both endpoints inside that
/// set. Weights are the global aggregates, untouched.
pub struct Subgraph<'g> {
    graph: &'g TransactionGraph,
    nodes: Vec<NodeId>,
    edge_indices: Vec<usize>,
}

impl<'g> Subgraph<'g> {
    /// Induce the subgraph of lessees satisfying `lessee_filter` and their
    /// single-hop lessor frontier.
    ///
    /// An empty match produces an empty subgraph; matching lessees without
    /// outgoing edges stay in the node set as isolated nodes.
    pub fn induced(
        graph: &'g TransactionGraph,
        lessee_filter: impl Fn(&Node) -> bool,
    ) -> Subgraph<'g> {
        let mut members: FxHashSet<NodeId> = graph
            .lessees()
            .filter(|n| lessee_filter(n))
            .map(|n| n.id)
            .collect();

        let matched: Vec<NodeId> = members.iter().copied().collect();
        for &id in &matched {
            for edge in graph.outgoing_edges(id) {
                members.insert(edge.target);
            }
        }

        let mut nodes: Vec<NodeId> = members.iter().copied().collect();
        nodes.sort_unstable();

        let edge_indices: Vec<usize> = graph
            .edges()
            .iter()
            .enumerate()
            .filter(|(_, e)| members.contains(&e.source) && members.contains(&e.target))
            .map(|(idx, _)| idx)
            .collect();

        Subgraph {
            graph,
            nodes,
            edge_indices,
        }
    }

    /// Lessees of a province and their lessors
    pub fn by_province(graph: &'g TransactionGraph, province: &str) -> Subgraph<'g> {
        Self::induced(graph, |n| n.province().as_str() == province)
    }

    /// Lessees of an industry and their lessors
    pub fn by_industry(graph: &'g TransactionGraph, industry: &str) -> Subgraph<'g> {
        Self::induced(graph, |n| {
            n.industry().is_some_and(|i| i.as_str() == industry)
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes of the view in id order
    pub fn nodes(&self) -> impl Iterator<Item = &'g Node> + '_ {
        self.nodes.iter().map(|&id| self.graph.node(id))
    }

    /// Edges of the view in global (source, target) order
    pub fn edges(&self) -> impl Iterator<Item = &'g Edge> + '_ {
        self.edge_indices.iter().map(|&idx| &self.graph.edges()[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::TransactionRecord;

    fn record(lessee: &str, province: &str, industry: &str, lessor: &str) -> TransactionRecord {
        TransactionRecord {
            lessee: lessee.to_string(),
            lessor: lessor.to_string(),
            lessee_province: province.into(),
            lessor_province: "Q".into(),
            industry: industry.into(),
            property_value: 100.0,
            lessor_kind: "private".to_string(),
            value_bin: None,
        }
    }

    fn sample_graph() -> TransactionGraph {
        TransactionGraph::build(&[
            record("L1", "P", "Agriculture", "R1"),
            record("L1", "P", "Agriculture", "R2"),
            record("L2", "P2", "Mining", "R2"),
        ])
    }

    #[test]
    fn test_province_subgraph_is_single_hop() {
        let graph = sample_graph();
        let sub = Subgraph::by_province(&graph, "P");

        let parties: Vec<_> = sub.nodes().map(|n| n.party.as_str()).collect();
        assert_eq!(parties, vec!["L1", "R1", "R2"]);
        // L2 -> R2 has a source outside the view and is excluded
        assert_eq!(sub.edge_count(), 2);
    }

    #[test]
    fn test_industry_subgraph() {
        let graph = sample_graph();
        let sub = Subgraph::by_industry(&graph, "Mining");

        let parties: Vec<_> = sub.nodes().map(|n| n.party.as_str()).collect();
        assert_eq!(parties, vec!["L2", "R2"]);
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn test_unmatched_filter_yields_empty_view() {
        let graph = sample_graph();
        let sub = Subgraph::by_province(&graph, "Nowhere");

        assert!(sub.is_empty());
        assert_eq!(sub.node_count(), 0);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn test_isolated_lessee_is_kept() {
        // L3 shares the province but all its edges were dropped as
        // self-transactions
        let mut looped = record("L3", "P", "Agriculture", "L3");
        looped.lessor_province = "P".into();
        let graph = TransactionGraph::build(&[record("L1", "P", "Agriculture", "R1"), looped]);

        let sub = Subgraph::by_province(&graph, "P");
        let parties: Vec<_> = sub.nodes().map(|n| n.party.as_str()).collect();
        assert_eq!(parties, vec!["L1", "L3", "R1"]);
        assert_eq!(sub.edge_count(), 1);
    }
}
