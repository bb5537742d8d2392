// tests/integration_replay.rs
use routeguard_core::graph::detect_cycles;
use routeguard_core::route::{Rejection, RouteValidator};
use routeguard_core::rules::RuleSet;
use routeguard_core::types::{Edge, RouteGraph};
use std::path::Path;
use std::sync::Arc;

const EXPORT: &str = r#"{
  "nodes": [
    { "id": "ESP", "type": "country", "position": { "x": 0, "y": 0 }, "data": { "name": "Spain" } },
    { "id": "FRA", "type": "country", "position": { "x": 1, "y": 0 }, "data": { "name": "France" } }
  ],
  "edges": [
    { "id": "reactflow__edge-ESP-FRA", "source": "ESP", "target": "FRA" },
    { "id": "reactflow__edge-FRA-DEU", "source": "FRA", "target": "DEU" },
    { "id": "reactflow__edge-ESP-GRC", "source": "ESP", "target": "GRC" },
    { "id": "reactflow__edge-DEU-ESP", "source": "DEU", "target": "ESP" },
    { "id": "reactflow__edge-ARM-AZE", "source": "AZE", "target": "ARM" },
    { "id": "reactflow__edge-FRA-DEU-2", "source": "FRA", "target": "DEU" },
    { "id": "reactflow__edge-DEU-POL", "source": "DEU", "target": "POL" }
  ],
  "exportedAt": "2025-01-01T10:00:00.000Z"
}"#;

fn validator() -> RouteValidator {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("rules/blockedRoutes.json");
    RouteValidator::new(Arc::new(RuleSet::load(&path).unwrap()))
}

#[test]
fn test_replay_of_editor_export() {
    let graph = RouteGraph::from_json_str(EXPORT, Path::new("travel-route.json")).unwrap();
    let report = validator().replay(graph.edges, Vec::new());

    assert_eq!(
        report.accepted(),
        &[
            Edge::new("ESP", "FRA"),
            Edge::new("FRA", "DEU"),
            Edge::new("DEU", "POL"),
        ]
    );

    let refused: Vec<(usize, &str)> = report
        .rejected()
        .iter()
        .map(|r| (r.index, r.rejection.label()))
        .collect();
    assert_eq!(
        refused,
        vec![
            (2, "BLOCKED"),
            (3, "CYCLE"),
            (4, "BLOCKED_UNDIRECTED"),
            (5, "DUPLICATE"),
        ]
    );
    assert!(!report.is_clean());
    assert!(detect_cycles(report.edges()).is_empty());
}

#[test]
fn test_replayed_graph_is_always_acyclic() {
    // Every ordered pair over five nodes, in a fixed order.
    let nodes = ["A", "B", "C", "D", "E"];
    let candidates: Vec<Edge> = nodes
        .iter()
        .flat_map(|s| nodes.iter().map(move |t| Edge::new(*s, *t)))
        .collect();
    let report = RouteValidator::default().replay(candidates, Vec::new());

    assert!(detect_cycles(report.edges()).is_empty());
    assert_eq!(report.accepted().len(), 10, "a tournament order on 5 nodes");
    assert!(report
        .rejected()
        .iter()
        .all(|r| matches!(r.rejection, Rejection::SelfLoop | Rejection::Cycle)));
}

#[test]
fn test_audit_finds_cycles_in_unvalidated_export() {
    let graph = RouteGraph::from_json_str(EXPORT, Path::new("travel-route.json")).unwrap();
    let cycles = detect_cycles(&graph.edges);
    assert_eq!(cycles, vec![vec!["DEU", "ESP", "FRA", "DEU"]]);
}
