//! Domain models for line-of-therapy data
//!
//! These models represent treatment histories as delivered by the data-retrieval
//! service, grouped per diagnosis.

pub mod diagnosis;
pub mod flow_graph;
pub mod treatment_line;

// Re-export commonly used types
pub use diagnosis::{DiagnosisLot, LotPayload};
pub use flow_graph::{FlowEdge, FlowGraph, LabelAnomaly};
pub use treatment_line::{PositionSource, RawTreatmentLine, TreatmentLine};
