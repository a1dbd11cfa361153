//! Memoization of flow graphs
//!
//! The transform is pure, so a graph is fully determined by the diagnosis code
//! and the exact records it was built from.

use crate::algorithm::lot::builder::build_flow_graph_with;
use crate::config::FlowConfig;
use crate::error::Result;
use crate::models::diagnosis::DiagnosisLot;
use crate::models::flow_graph::FlowGraph;
use crate::models::treatment_line::RawTreatmentLine;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    code: String,
    lines: Vec<RawTreatmentLine>,
}

/// Flow graphs keyed by diagnosis code and record snapshot
#[derive(Debug, Default)]
pub struct FlowGraphCache {
    config: FlowConfig,
    entries: FxHashMap<CacheKey, FlowGraph>,
    hits: usize,
    misses: usize,
}

impl FlowGraphCache {
    #[must_use]
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Return the cached graph for `diagnosis`, building it on first use
    ///
    /// Diagnoses without treatment lines are not cached.
    pub fn get_or_build(&mut self, diagnosis: &DiagnosisLot) -> Result<FlowGraph> {
        let key = CacheKey {
            code: diagnosis.code.clone(),
            lines: diagnosis.lines.clone(),
        };
        if let Some(graph) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(graph.clone());
        }

        let graph = build_flow_graph_with(&diagnosis.lines, &self.config)?;
        self.misses += 1;
        self.entries.insert(key, graph.clone());
        Ok(graph)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
