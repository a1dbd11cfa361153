//! Structural properties that must hold for any input

use lot_flow::{RawTreatmentLine, build_flow_graph, compute_presentation_width};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

const NAMES: [&str; 5] = ["drug A", "drug B", "drug C", "", "  drug A  "];

/// Random histories with repeated names, missing positions and colliding positions
fn random_history(rng: &mut StdRng) -> Vec<RawTreatmentLine> {
    let len = rng.random_range(1..30);
    (0..len)
        .map(|_| {
            let name = NAMES[rng.random_range(0..NAMES.len())];
            let line = RawTreatmentLine::new(name);
            match rng.random_range(0..4) {
                0 => line,
                1 => line.with_alternate_line_number(rng.random_range(1..10)),
                _ => line.with_line_number(rng.random_range(-1..10)),
            }
        })
        .collect()
}

#[test]
fn test_node_and_edge_counts() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let records = random_history(&mut rng);
        let graph = build_flow_graph(&records).unwrap();

        assert_eq!(graph.node_count(), records.len() + 1);
        assert_eq!(graph.edge_count(), records.len());
    }
}

#[test]
fn test_graph_is_a_single_simple_path() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let graph = build_flow_graph(&random_history(&mut rng)).unwrap();
        assert!(graph.is_simple_chain());

        let mut incoming = vec![0usize; graph.node_count()];
        let mut outgoing = vec![0usize; graph.node_count()];
        for edge in &graph.edges {
            outgoing[edge.source] += 1;
            incoming[edge.target] += 1;
        }
        assert_eq!(incoming[0], 0);
        assert!(incoming[1..].iter().all(|&n| n == 1));
        assert!(outgoing[..graph.node_count() - 1].iter().all(|&n| n == 1));
        assert_eq!(outgoing[graph.node_count() - 1], 0);
    }
}

#[test]
fn test_labels_are_unique() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..200 {
        let graph = build_flow_graph(&random_history(&mut rng)).unwrap();
        let mut labels = graph.node_labels.clone();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), graph.node_count());
    }
}

#[test]
fn test_deterministic_output() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let records = random_history(&mut rng);
        assert_eq!(
            build_flow_graph(&records).unwrap(),
            build_flow_graph(&records).unwrap()
        );
    }
}

#[test]
fn test_permutation_with_distinct_positions() {
    let mut rng = StdRng::seed_from_u64(37);
    let records: Vec<RawTreatmentLine> = (1..=12)
        .map(|pos| RawTreatmentLine::new(format!("regimen {}", pos % 4)).with_line_number(pos))
        .collect();
    let expected = build_flow_graph(&records).unwrap();

    for _ in 0..50 {
        let mut shuffled = records.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(build_flow_graph(&shuffled).unwrap(), expected);
    }
}

#[test]
fn test_stable_order_for_equal_positions() {
    let records: Vec<RawTreatmentLine> = ["x", "y", "z", "w"]
        .iter()
        .map(|name| RawTreatmentLine::new(*name).with_line_number(2))
        .chain(std::iter::once(RawTreatmentLine::new("first").with_line_number(1)))
        .collect();
    let graph = build_flow_graph(&records).unwrap();

    assert_eq!(
        graph.node_labels,
        ["Start", "first (L1)", "x (L2)", "y (L2)", "z (L2)", "w (L2)"]
    );
}

#[test]
fn test_width_never_below_minimum() {
    let mut previous = 0;
    for node_count in 0..500 {
        let width = compute_presentation_width(node_count);
        assert!(width >= 1200);
        assert!(width >= previous);
        previous = width;
    }
}
