//! Shared utilities for ranking algorithms
//!
//! Provides a read-only, dense projection of a weighted directed graph for
//! algorithm execution.

use std::collections::HashMap;

/// Node identifier type (u64). The caller owns the mapping to its own ids.
pub type NodeId = u64;

/// A dense, integer-indexed view of a weighted directed graph.
///
/// Power iteration walks *incoming* edges of every node, each carrying the
/// transition probability of the step `source -> node`. The view therefore
/// stores the transpose in CSR form with probabilities pre-normalized by
/// each source's total outgoing weight, plus the out-degree per node so
/// dangling nodes can be identified.
pub struct GraphView {
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,
    /// Offsets into `in_sources` / `in_probs`. Size = node_count + 1
    in_offsets: Vec<usize>,
    /// Source index of each incoming edge
    in_sources: Vec<usize>,
    /// Transition probability of each incoming edge, normalized so the
    /// probabilities of a source's outgoing edges sum to 1
    in_probs: Vec<f64>,
    /// Number of outgoing edges per node
    out_degrees: Vec<usize>,
}

impl GraphView {
    /// Project a weighted edge list onto dense indices.
    ///
    /// `nodes` fixes the index order; edges whose endpoints are not in
    /// `nodes` are ignored. Negative weights are clamped to zero. A source
    /// whose outgoing weights sum to zero falls back to uniform transition
    /// probabilities over its outgoing edges.
    pub fn from_weighted_edges(nodes: &[NodeId], edges: &[(NodeId, NodeId, f64)]) -> Self {
        let node_count = nodes.len();
        let index_to_node = nodes.to_vec();
        let mut node_to_index = HashMap::with_capacity(node_count);
        for (idx, &id) in nodes.iter().enumerate() {
            node_to_index.insert(id, idx);
        }

        // Resolve endpoints and accumulate per-source weight totals
        let mut resolved: Vec<(usize, usize, f64)> = Vec::with_capacity(edges.len());
        let mut out_weight = vec![0.0f64; node_count];
        let mut out_degrees = vec![0usize; node_count];
        for &(source, target, weight) in edges {
            let (Some(&u), Some(&v)) = (node_to_index.get(&source), node_to_index.get(&target))
            else {
                continue;
            };
            let w = weight.max(0.0);
            resolved.push((u, v, w));
            out_weight[u] += w;
            out_degrees[u] += 1;
        }

        // Transposed CSR: bucket incoming edges per target
        let mut in_counts = vec![0usize; node_count];
        for &(_, v, _) in &resolved {
            in_counts[v] += 1;
        }
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        in_offsets.push(0);
        for &c in &in_counts {
            in_offsets.push(in_offsets.last().copied().unwrap_or(0) + c);
        }

        let mut cursor = in_offsets[..node_count].to_vec();
        let mut in_sources = vec![0usize; resolved.len()];
        let mut in_probs = vec![0.0f64; resolved.len()];
        for &(u, v, w) in &resolved {
            let slot = cursor[v];
            cursor[v] += 1;
            in_sources[slot] = u;
            in_probs[slot] = if out_weight[u] > 0.0 {
                w / out_weight[u]
            } else {
                1.0 / out_degrees[u] as f64
            };
        }

        Self {
            index_to_node,
            node_to_index,
            in_offsets,
            in_sources,
            in_probs,
            out_degrees,
        }
    }

    /// Number of nodes in the view
    pub fn node_count(&self) -> usize {
        self.index_to_node.len()
    }

    /// Number of edges in the view
    pub fn edge_count(&self) -> usize {
        self.in_sources.len()
    }

    /// Incoming edges of a node as `(source_index, transition_probability)`
    pub fn incoming(&self, idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        self.in_sources[start..end]
            .iter()
            .copied()
            .zip(self.in_probs[start..end].iter().copied())
    }

    /// Whether the node has no outgoing edges
    pub fn is_dangling(&self, idx: usize) -> bool {
        self.out_degrees[idx] == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_normalizes_outgoing_weights() {
        // 1 -> 2 (weight 3), 1 -> 3 (weight 1)
        let view = GraphView::from_weighted_edges(&[1, 2, 3], &[(1, 2, 3.0), (1, 3, 1.0)]);

        assert_eq!(view.node_count(), 3);
        assert_eq!(view.edge_count(), 2);

        let incoming: Vec<_> = view.incoming(1).collect();
        assert_eq!(incoming, vec![(0, 0.75)]);
        let incoming: Vec<_> = view.incoming(2).collect();
        assert_eq!(incoming, vec![(0, 0.25)]);

        assert!(!view.is_dangling(0));
        assert!(view.is_dangling(1));
        assert!(view.is_dangling(2));
    }

    #[test]
    fn zero_weight_source_falls_back_to_uniform() {
        let view = GraphView::from_weighted_edges(&[1, 2, 3], &[(1, 2, 0.0), (1, 3, 0.0)]);

        let (_, p2) = view.incoming(1).next().unwrap();
        let (_, p3) = view.incoming(2).next().unwrap();
        assert_eq!(p2, 0.5);
        assert_eq!(p3, 0.5);
    }

    #[test]
    fn unknown_endpoints_are_ignored() {
        let view = GraphView::from_weighted_edges(&[1, 2], &[(1, 2, 1.0), (1, 99, 1.0)]);
        assert_eq!(view.edge_count(), 1);
    }
}
