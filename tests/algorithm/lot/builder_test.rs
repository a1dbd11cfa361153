//! Tests for flow graph construction

use lot_flow::{
    FlowEdge, LotError, RawTreatmentLine, build_flow_graph, build_flow_graph_with,
    compute_presentation_width, FlowConfig,
};

fn line(name: &str, position: i64) -> RawTreatmentLine {
    RawTreatmentLine::new(name).with_line_number(position)
}

#[test]
fn test_two_line_history() {
    let records = vec![line("vitamin e", 1), line("donepezil + vitamin e", 2)];
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(
        graph.node_labels,
        ["Start", "vitamin e (L1)", "donepezil + vitamin e (L2)"]
    );
    assert_eq!(
        graph.edges,
        vec![FlowEdge::new(0, 1, 2), FlowEdge::new(1, 2, 2)]
    );
    assert_eq!(compute_presentation_width(graph.node_count()), 1200);
    assert!(!graph.has_anomalies());
}

#[test]
fn test_twenty_one_lines() {
    let records: Vec<RawTreatmentLine> = (1..=21)
        .map(|pos| line(&format!("regimen {pos}"), pos))
        .collect();
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(graph.node_count(), 22);
    assert_eq!(graph.edge_count(), 21);
    assert_eq!(compute_presentation_width(graph.node_count()), 4400);
    assert_eq!(graph.node_labels[21], "regimen 21 (L21)");
}

#[test]
fn test_empty_input_is_insufficient_data() {
    let err = build_flow_graph(&[]).unwrap_err();
    assert!(matches!(err, LotError::InsufficientData));
}

#[test]
fn test_single_line_without_position() {
    let graph = build_flow_graph(&[RawTreatmentLine::new("drug A")]).unwrap();

    assert_eq!(graph.node_labels, ["Start", "drug A (L1)"]);
    assert_eq!(graph.edges, vec![FlowEdge::new(0, 1, 2)]);
}

#[test]
fn test_repeated_treatment_stays_distinct() {
    let graph = build_flow_graph(&[line("drug A", 1), line("drug A", 4)]).unwrap();

    assert_eq!(graph.node_labels, ["Start", "drug A (L1)", "drug A (L4)"]);
    assert!(graph.is_simple_chain());
}

#[test]
fn test_out_of_order_input_is_sorted() {
    let records = vec![line("third", 3), line("first", 1), line("second", 2)];
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(
        graph.node_labels,
        ["Start", "first (L1)", "second (L2)", "third (L3)"]
    );
}

#[test]
fn test_alternate_position_field() {
    let records = vec![
        RawTreatmentLine::new("later").with_alternate_line_number(2),
        RawTreatmentLine::new("earlier").with_alternate_line_number(1),
    ];
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(graph.node_labels, ["Start", "earlier (L1)", "later (L2)"]);
}

#[test]
fn test_blank_name_uses_placeholder() {
    let records = vec![line("   ", 1), line("", 2)];
    let graph = build_flow_graph(&records).unwrap();
    assert_eq!(graph.node_labels, ["Start", "Unknown (L1)", "Unknown (L2)"]);

    let config = FlowConfig::default().with_placeholder_name("Unnamed therapy");
    let graph = build_flow_graph_with(&records, &config).unwrap();
    assert_eq!(graph.node_labels[1], "Unnamed therapy (L1)");
}

#[test]
fn test_all_lines_share_a_position() {
    let records = vec![line("c", 5), line("a", 5), line("b", 5)];
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(graph.node_labels, ["Start", "c (L5)", "a (L5)", "b (L5)"]);
    assert!(graph.is_simple_chain());
}

#[test]
fn test_duplicate_name_and_position_keeps_both_nodes() {
    let records = vec![line("drug A", 2), line("drug B", 1), line("drug A", 2)];
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(
        graph.node_labels,
        ["Start", "drug B (L1)", "drug A (L2)", "drug A (L2) #3"]
    );
    assert_eq!(graph.anomalies.len(), 1);
    assert_eq!(graph.anomalies[0].label, "drug A (L2)");
    assert_eq!(graph.anomalies[0].ordinal, 3);
    assert!(graph.is_simple_chain());
}

#[test]
fn test_custom_origin_and_weight() {
    let config = FlowConfig::default()
        .with_origin_label("Diagnosis")
        .with_edge_weight(5);
    let graph = build_flow_graph_with(&[line("drug A", 1)], &config).unwrap();

    assert_eq!(graph.origin_label(), Some("Diagnosis"));
    assert_eq!(graph.edges, vec![FlowEdge::new(0, 1, 5)]);
}
