//! Mermaid `sankey-beta` output
//!
//! Each edge becomes one `source,target,value` CSV row. Fields holding a comma,
//! quote or line break are wrapped in quotes with inner quotes doubled.

use crate::models::flow_graph::FlowGraph;
use itertools::Itertools;

const SANKEY_HEADER: &str = "sankey-beta";

/// Render `graph` as a Mermaid sankey diagram
#[must_use]
pub fn to_mermaid_sankey(graph: &FlowGraph) -> String {
    let rows = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let source = graph.node_labels.get(edge.source)?;
            let target = graph.node_labels.get(edge.target)?;
            Some(format!(
                "{},{},{}",
                csv_field(source),
                csv_field(target),
                edge.weight
            ))
        })
        .join("\n");

    if rows.is_empty() {
        format!("{SANKEY_HEADER}\n")
    } else {
        format!("{SANKEY_HEADER}\n\n{rows}\n")
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
