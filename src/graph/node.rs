//! Node implementation for the transaction graph

use super::types::{Industry, NodeId, Province};
use serde::{Deserialize, Serialize};

/// Role-specific attributes of a node.
///
/// The two roles carry different attribute sets, so they are modeled as a
/// tagged variant rather than a shared attribute map. Attributes are fixed
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Entity initiating leasing transactions (edge source)
    Lessee { province: Province, industry: Industry },
    /// Entity providing leased property (edge target, recommendation candidate)
    Lessor { province: Province },
}

/// A node in the transaction graph.
///
/// Identity is the raw party identifier string; at most one node exists
/// per identifier. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Dense id inside the owning graph
    pub id: NodeId,
    /// Raw party identifier
    pub party: String,
    /// Role and role-specific attributes
    pub kind: NodeKind,
}

impl Node {
    /// Create a lessee node
    pub fn lessee(
        id: NodeId,
        party: impl Into<String>,
        province: Province,
        industry: Industry,
    ) -> Self {
        Node {
            id,
            party: party.into(),
            kind: NodeKind::Lessee { province, industry },
        }
    }

    /// Create a lessor node
    pub fn lessor(id: NodeId, party: impl Into<String>, province: Province) -> Self {
        Node {
            id,
            party: party.into(),
            kind: NodeKind::Lessor { province },
        }
    }

    pub fn is_lessee(&self) -> bool {
        matches!(self.kind, NodeKind::Lessee { .. })
    }

    pub fn is_lessor(&self) -> bool {
        matches!(self.kind, NodeKind::Lessor { .. })
    }

    /// Province of the party, regardless of role
    pub fn province(&self) -> &Province {
        match &self.kind {
            NodeKind::Lessee { province, .. } => province,
            NodeKind::Lessor { province } => province,
        }
    }

    /// Industry classification; only lessees carry one
    pub fn industry(&self) -> Option<&Industry> {
        match &self.kind {
            NodeKind::Lessee { industry, .. } => Some(industry),
            NodeKind::Lessor { .. } => None,
        }
    }
}
