//! Flow graph output model

use serde::{Deserialize, Serialize};

/// Index of the synthetic origin node
pub const ORIGIN_INDEX: usize = 0;

/// Directed, weighted edge between two node indices
///
/// Serialized as a `[source, target, weight]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize, u32)", into = "(usize, usize, u32)")]
pub struct FlowEdge {
    /// Index of the source node
    pub source: usize,
    /// Index of the target node
    pub target: usize,
    /// Visual thickness; carries no clinical meaning
    pub weight: u32,
}

impl FlowEdge {
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl From<(usize, usize, u32)> for FlowEdge {
    fn from((source, target, weight): (usize, usize, u32)) -> Self {
        Self::new(source, target, weight)
    }
}

impl From<FlowEdge> for (usize, usize, u32) {
    fn from(edge: FlowEdge) -> Self {
        (edge.source, edge.target, edge.weight)
    }
}

/// Two treatment lines that synthesized the same label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAnomaly {
    /// The colliding label
    pub label: String,
    /// 1-based place of the later line in the sorted sequence
    pub ordinal: usize,
    /// Label emitted for the later line instead
    pub disambiguated: String,
}

/// Single-chain flow graph: origin, then one node per treatment line
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowGraph {
    /// Unique node labels; index 0 is the origin
    pub node_labels: Vec<String>,
    /// Edges along the chain, in order
    pub edges: Vec<FlowEdge>,
    /// Duplicate-label diagnostics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anomalies: Vec<LabelAnomaly>,
}

impl FlowGraph {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_labels.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Label of the origin node, if any
    #[must_use]
    pub fn origin_label(&self) -> Option<&str> {
        self.node_labels.get(ORIGIN_INDEX).map(String::as_str)
    }

    /// Labels of the treatment nodes, excluding the origin
    #[must_use]
    pub fn treatment_labels(&self) -> &[String] {
        self.node_labels.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// Whether the edges form one simple path from the origin through every node
    /// in index order
    #[must_use]
    pub fn is_simple_chain(&self) -> bool {
        if self.node_labels.is_empty() || self.edges.len() + 1 != self.node_labels.len() {
            return false;
        }
        self.edges
            .iter()
            .enumerate()
            .all(|(i, edge)| edge.source == i && edge.target == i + 1)
    }
}
