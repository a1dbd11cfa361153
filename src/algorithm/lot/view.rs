//! Presentation states handed to the rendering side
//!
//! A renderer must tell "no diagnosis at all" apart from "a diagnosis with no
//! treatment lines" and from a drawable graph.

use crate::algorithm::lot::builder::build_flow_graph_with;
use crate::config::FlowConfig;
use crate::models::diagnosis::DiagnosisLot;
use crate::models::flow_graph::FlowGraph;
use serde::Serialize;

/// What the renderer should show for the active diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowView {
    /// No diagnosis data exists for the patient
    NoData,
    /// The diagnosis exists but has no treatment lines
    NotEnoughData {
        code: String,
        name: Option<String>,
    },
    /// A drawable chain and its presentation width
    Graph {
        code: String,
        name: Option<String>,
        graph: FlowGraph,
        width: u32,
    },
}

impl FlowView {
    /// View for the diagnosis chosen by the selection step, if any
    #[must_use]
    pub fn from_selection(selected: Option<&DiagnosisLot>, config: &FlowConfig) -> Self {
        selected.map_or(Self::NoData, |diagnosis| Self::for_diagnosis(diagnosis, config))
    }

    /// View for one diagnosis
    #[must_use]
    pub fn for_diagnosis(diagnosis: &DiagnosisLot, config: &FlowConfig) -> Self {
        match build_flow_graph_with(&diagnosis.lines, config) {
            Ok(graph) => {
                let width = config.presentation_width(graph.node_count());
                Self::Graph {
                    code: diagnosis.code.clone(),
                    name: diagnosis.name.clone(),
                    graph,
                    width,
                }
            }
            Err(err) => {
                log::debug!("No flow graph for diagnosis {}: {err}", diagnosis.code);
                Self::NotEnoughData {
                    code: diagnosis.code.clone(),
                    name: diagnosis.name.clone(),
                }
            }
        }
    }

    #[must_use]
    pub const fn graph(&self) -> Option<&FlowGraph> {
        match self {
            Self::Graph { graph, .. } => Some(graph),
            _ => None,
        }
    }

    #[must_use]
    pub const fn width(&self) -> Option<u32> {
        match self {
            Self::Graph { width, .. } => Some(*width),
            _ => None,
        }
    }

    /// Diagnosis code, unless there is no diagnosis at all
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::NoData => None,
            Self::NotEnoughData { code, .. } | Self::Graph { code, .. } => Some(code),
        }
    }
}
