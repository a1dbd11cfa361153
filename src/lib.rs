//! A Rust library for turning line-of-therapy treatment histories into
//! single-chain flow graphs for Sankey-style rendering.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::FlowConfig;
pub use error::{LotError, Result};
pub use models::{
    DiagnosisLot, FlowEdge, FlowGraph, LabelAnomaly, LotPayload, PositionSource,
    RawTreatmentLine, TreatmentLine,
};

// Transformation
pub use algorithm::lot::{
    FlowGraphCache, FlowView, build_all, build_flow_graph, build_flow_graph_with,
    build_from_lines, compute_presentation_width, normalize_lines,
};

// Output
pub use export::{to_json, to_mermaid_sankey};
