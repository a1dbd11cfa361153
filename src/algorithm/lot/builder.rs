//! Sequence-to-graph transformation
//!
//! Turns one diagnosis's treatment lines into a single chain:
//! origin -> line 1 -> line 2 -> ... -> line N. Node labels carry the line
//! position (`"name (L<n>)"`), so a treatment repeated at different positions
//! stays two nodes and the chain never revisits a node.

use crate::config::FlowConfig;
use crate::error::{LotError, Result};
use crate::models::flow_graph::{FlowEdge, FlowGraph, LabelAnomaly, ORIGIN_INDEX};
use crate::models::treatment_line::{RawTreatmentLine, TreatmentLine};
use crate::algorithm::lot::normalize::normalize_lines;
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Build a flow graph with the default configuration
///
/// Returns `LotError::InsufficientData` when `records` is empty.
pub fn build_flow_graph(records: &[RawTreatmentLine]) -> Result<FlowGraph> {
    build_flow_graph_with(records, &FlowConfig::default())
}

/// Build a flow graph from raw records
pub fn build_flow_graph_with(records: &[RawTreatmentLine], config: &FlowConfig) -> Result<FlowGraph> {
    if records.is_empty() {
        return Err(LotError::InsufficientData);
    }
    let lines = normalize_lines(records, &config.date_format_config);
    build_from_lines(lines, config)
}

/// Build a flow graph from already-normalized lines
pub fn build_from_lines(mut lines: Vec<TreatmentLine>, config: &FlowConfig) -> Result<FlowGraph> {
    if lines.is_empty() {
        return Err(LotError::InsufficientData);
    }

    sort_chronologically(&mut lines);

    let mut node_labels = Vec::with_capacity(lines.len() + 1);
    let mut anomalies = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    node_labels.push(config.origin_label.clone());
    seen.insert(config.origin_label.clone());

    for (idx, line) in lines.iter().enumerate() {
        let label = synthesize_label(line, &config.placeholder_name);
        let label = if seen.contains(&label) {
            let ordinal = idx + 1;
            let disambiguated = disambiguate(&label, ordinal, &seen);
            log::warn!(
                "Duplicate treatment line label {label:?} at sequence ordinal {ordinal}; emitting {disambiguated:?}"
            );
            anomalies.push(LabelAnomaly {
                label,
                ordinal,
                disambiguated: disambiguated.clone(),
            });
            disambiguated
        } else {
            label
        };
        seen.insert(label.clone());
        node_labels.push(label);
    }

    let edges = chain_edges(node_labels.len(), config.edge_weight);

    log::debug!(
        "Built flow graph with {} nodes and {} edges ({} label anomalies)",
        node_labels.len(),
        edges.len(),
        anomalies.len()
    );

    Ok(FlowGraph {
        node_labels,
        edges,
        anomalies,
    })
}

/// Stable ascending sort by resolved position; equal positions keep input order
pub fn sort_chronologically(lines: &mut [TreatmentLine]) {
    lines.sort_by_key(|line| line.position);
}

/// `"<name> (L<position>)"`, with `placeholder` standing in for a blank name
#[must_use]
pub fn synthesize_label(line: &TreatmentLine, placeholder: &str) -> String {
    let name = line.name.trim();
    let name = if name.is_empty() { placeholder } else { name };
    format!("{name} (L{})", line.position)
}

fn disambiguate(label: &str, ordinal: usize, seen: &FxHashSet<String>) -> String {
    let mut candidate = format!("{label} #{ordinal}");
    let mut extra = 1;
    while seen.contains(&candidate) {
        extra += 1;
        candidate = format!("{label} #{ordinal}.{extra}");
    }
    candidate
}

/// Edges origin -> 1 -> 2 -> ... over `node_count` nodes
fn chain_edges(node_count: usize, weight: u32) -> Vec<FlowEdge> {
    (ORIGIN_INDEX..node_count)
        .tuple_windows()
        .map(|(source, target)| FlowEdge::new(source, target, weight))
        .collect()
}
