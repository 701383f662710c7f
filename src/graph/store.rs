//! Immutable in-memory storage for the transaction graph
//!
//! A graph is built once per training cycle and then only read. Nodes are
//! held in an arena indexed by `NodeId`, with a party-identifier index and
//! per-node outgoing adjacency lists for traversal.

use super::edge::Edge;
use super::node::Node;
use super::types::NodeId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The global directed, weighted transaction graph.
///
/// Nodes are stored in canonical order (lessees first, each group sorted by
/// party identifier), so building from the same record multiset in any
/// order yields an identical structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionGraph {
    /// Node arena; `NodeId` indexes into it
    nodes: Vec<Node>,

    /// Edge arena, sorted by (source, target)
    edges: Vec<Edge>,

    /// Party identifier -> node id
    party_index: FxHashMap<String, NodeId>,

    /// Outgoing edge indices per node
    outgoing: Vec<Vec<usize>>,
}

impl TransactionGraph {
    /// Assemble a graph from finished node and edge arenas.
    ///
    /// Callers must hand over nodes in id order and edges whose endpoints
    /// exist; the builder is the only production caller.
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut party_index =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for node in &nodes {
            party_index.insert(node.party.clone(), node.id);
        }

        let mut outgoing = vec![Vec::new(); nodes.len()];
        for (idx, edge) in edges.iter().enumerate() {
            outgoing[edge.source.index()].push(idx);
        }

        Self {
            nodes,
            edges,
            party_index,
            outgoing,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in (source, target) order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node by dense id. Ids handed out by this graph are always valid.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Node by raw party identifier
    pub fn node_by_party(&self, party: &str) -> Option<&Node> {
        self.party_index.get(party).map(|&id| self.node(id))
    }

    /// Outgoing edges of a node
    pub fn outgoing_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.outgoing[id.index()].iter().map(|&idx| &self.edges[idx])
    }

    /// All lessee nodes
    pub fn lessees(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_lessee())
    }

    /// All lessor nodes
    pub fn lessors(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_lessor())
    }
}
