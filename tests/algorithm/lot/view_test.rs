//! Tests for presentation states and batch transformation

use lot_flow::{
    DiagnosisLot, FlowConfig, FlowGraphCache, FlowView, LotPayload, RawTreatmentLine, build_all,
    to_mermaid_sankey,
};

fn payload() -> LotPayload {
    LotPayload::new(vec![
        DiagnosisLot::new("G30")
            .with_name("Alzheimer's disease")
            .with_lines(vec![
                RawTreatmentLine::new("donepezil + vitamin e").with_line_number(2),
                RawTreatmentLine::new("vitamin e").with_line_number(1),
            ]),
        DiagnosisLot::new("E11").with_name("Type 2 diabetes mellitus"),
    ])
}

#[test]
fn test_selected_diagnosis_view() {
    let payload = payload();
    let config = FlowConfig::default();

    let view = FlowView::from_selection(payload.select(None), &config);
    let graph = view.graph().unwrap();
    assert_eq!(graph.node_labels[1], "vitamin e (L1)");
    assert_eq!(view.width(), Some(1200));

    let view = FlowView::from_selection(payload.select(Some("E11")), &config);
    assert!(matches!(view, FlowView::NotEnoughData { ref code, .. } if code == "E11"));

    let view = FlowView::from_selection(LotPayload::default().select(None), &config);
    assert_eq!(view, FlowView::NoData);
}

#[test]
fn test_batch_matches_single_views() {
    let payload = payload();
    let config = FlowConfig::default();
    let views = build_all(&payload, &config);

    assert_eq!(views.len(), 2);
    for (view, diagnosis) in views.iter().zip(&payload.diagnoses) {
        assert_eq!(view, &FlowView::for_diagnosis(diagnosis, &config));
    }
}

#[test]
fn test_cache_returns_same_graph_as_view() {
    let payload = payload();
    let mut cache = FlowGraphCache::new(FlowConfig::default());
    let view = FlowView::for_diagnosis(&payload.diagnoses[0], &FlowConfig::default());

    let cached = cache.get_or_build(&payload.diagnoses[0]).unwrap();
    assert_eq!(Some(&cached), view.graph());
    cache.get_or_build(&payload.diagnoses[0]).unwrap();
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_mermaid_export_of_view() {
    let payload = payload();
    let view = FlowView::for_diagnosis(&payload.diagnoses[0], &FlowConfig::default());
    let text = to_mermaid_sankey(view.graph().unwrap());

    assert!(text.starts_with("sankey-beta\n"));
    assert!(text.contains("Start,vitamin e (L1),2"));
    assert!(text.contains("vitamin e (L1),donepezil + vitamin e (L2),2"));
}
