//! Transform every diagnosis in a payload

use crate::algorithm::lot::view::FlowView;
use crate::config::FlowConfig;
use crate::models::diagnosis::LotPayload;
use crate::utils::logging::{log_operation_complete, log_operation_start};
use rayon::prelude::*;
use std::time::Instant;

/// Build the view of every diagnosis in parallel, preserving payload order
#[must_use]
pub fn build_all(payload: &LotPayload, config: &FlowConfig) -> Vec<FlowView> {
    let start = Instant::now();

    let views: Vec<FlowView> = payload
        .diagnoses
        .par_iter()
        .map(|diagnosis| {
            log_operation_start(
                "Building flow graph",
                &format!("diagnosis {}", diagnosis.code),
                diagnosis.lines.len(),
            );
            FlowView::for_diagnosis(diagnosis, config)
        })
        .collect();

    let nodes: usize = views
        .iter()
        .filter_map(FlowView::graph)
        .map(|graph| graph.node_count())
        .sum();
    log_operation_complete(
        "built",
        &format!("{} diagnoses", views.len()),
        nodes,
        Some(start.elapsed()),
    );

    views
}
