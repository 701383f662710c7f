//! Core type definitions for the transaction graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier of a node inside one built graph.
///
/// Ids are assigned during construction in canonical order and are not
/// stable across rebuilds; the stable identity of a party is its raw
/// identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Province a party belongs to (first segment of the composite region)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Province(String);

impl Province {
    pub fn new(province: impl Into<String>) -> Self {
        Province(province.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Province {
    fn from(s: String) -> Self {
        Province(s)
    }
}

impl From<&str> for Province {
    fn from(s: &str) -> Self {
        Province(s.to_string())
    }
}

/// First-level industry classification of a lessee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Industry(String);

impl Industry {
    pub fn new(industry: impl Into<String>) -> Self {
        Industry(industry.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Industry {
    fn from(s: String) -> Self {
        Industry(s)
    }
}

impl From<&str> for Industry {
    fn from(s: &str) -> Self {
        Industry(s.to_string())
    }
}
