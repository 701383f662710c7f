//! Construction of the global transaction graph from cleaned records

use super::edge::Edge;
use super::node::Node;
use super::store::TransactionGraph;
use super::types::NodeId;
use crate::ingest::TransactionRecord;
use rustc_hash::FxHashMap;

impl TransactionGraph {
    /// Build the global graph from cleaned transaction records.
    ///
    /// Node attributes are deduplicated per identifier keeping the
    /// first-seen values; records are grouped by (lessee, lessor) and each
    /// group becomes a single edge aggregating `count` and `total_value`.
    /// The result is independent of record order.
    ///
    /// An identifier appearing both as lessee and lessor keeps its lessee
    /// role, and edges that would loop a node onto itself (or point at a
    /// lessee) are dropped.
    pub fn build(records: &[TransactionRecord]) -> TransactionGraph {
        // First-seen attribute dedup per identifier, lessees taking
        // precedence over lessors
        let mut lessee_attrs = FxHashMap::default();
        for record in records {
            lessee_attrs
                .entry(record.lessee.as_str())
                .or_insert((&record.lessee_province, &record.industry));
        }
        let mut lessor_attrs = FxHashMap::default();
        for record in records {
            if lessee_attrs.contains_key(record.lessor.as_str()) {
                continue;
            }
            lessor_attrs
                .entry(record.lessor.as_str())
                .or_insert(&record.lessor_province);
        }

        // Aggregate one group per (lessee, lessor) pair
        let mut groups: FxHashMap<(&str, &str), (u64, f64)> = FxHashMap::default();
        for record in records {
            let group = groups
                .entry((record.lessee.as_str(), record.lessor.as_str()))
                .or_insert((0, 0.0));
            group.0 += 1;
            group.1 += record.property_value;
        }

        // Canonical node order: lessees first, both groups sorted by
        // identifier, making ids independent of record order
        let mut lessee_ids: Vec<&str> = lessee_attrs.keys().copied().collect();
        lessee_ids.sort_unstable();
        let mut lessor_ids: Vec<&str> = lessor_attrs.keys().copied().collect();
        lessor_ids.sort_unstable();

        let mut nodes = Vec::with_capacity(lessee_ids.len() + lessor_ids.len());
        for party in &lessee_ids {
            let (province, industry) = lessee_attrs[party];
            let id = NodeId::new(nodes.len() as u32);
            nodes.push(Node::lessee(id, *party, province.clone(), industry.clone()));
        }
        for party in &lessor_ids {
            let province = lessor_attrs[party];
            let id = NodeId::new(nodes.len() as u32);
            nodes.push(Node::lessor(id, *party, province.clone()));
        }

        let party_id: FxHashMap<&str, NodeId> = nodes
            .iter()
            .map(|n| (n.party.as_str(), n.id))
            .collect();

        let mut edges = Vec::with_capacity(groups.len());
        for ((lessee, lessor), (count, total_value)) in groups {
            if lessee == lessor {
                continue;
            }
            // A dual-role target kept its lessee variant; no edge points at it
            if !lessor_attrs.contains_key(lessor) {
                continue;
            }
            edges.push(Edge::new(party_id[lessee], party_id[lessor], count, total_value));
        }
        edges.sort_unstable_by_key(|e| (e.source, e.target));

        TransactionGraph::from_parts(nodes, edges)
    }
}
