// tests/cli_exit.rs - Exit code tests
use routeguard_core::cli::handlers::{handle_audit, handle_check, handle_replay};
use routeguard_core::cli::{OutputFormat, Session};
use routeguard_core::config::CONFIG_FILE;
use routeguard_core::exit::RouteGuardExit;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RULES: &str = r#"{ "blocked": [{ "from": "ESP", "to": "GRC" }] }"#;

fn workspace() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(d.path().join("rules")).unwrap();
    fs::write(d.path().join("rules/blockedRoutes.json"), RULES).unwrap();
    fs::write(
        d.path().join("graph.json"),
        r#"{ "edges": [{ "source": "A", "target": "B" }, { "source": "B", "target": "C" }] }"#,
    )
    .unwrap();
    d
}

fn session(d: &TempDir) -> Session {
    Session::open(d.path()).unwrap()
}

fn check(d: &TempDir, s: &str, t: &str) -> RouteGuardExit {
    let graph = d.path().join("graph.json");
    handle_check(&session(d), s, t, Some(&graph), None, OutputFormat::Json).unwrap()
}

#[test]
fn test_exit_0_accepted() {
    let d = workspace();
    assert_eq!(check(&d, "C", "D"), RouteGuardExit::Success);
}

#[test]
fn test_exit_3_rejected_with_reason() {
    let d = workspace();
    assert_eq!(check(&d, "C", "A"), RouteGuardExit::Rejected);
    assert_eq!(check(&d, "ESP", "GRC"), RouteGuardExit::Rejected);
}

#[test]
fn test_exit_4_silent() {
    let d = workspace();
    assert_eq!(check(&d, "A", "B"), RouteGuardExit::SilentReject);
    assert_eq!(check(&d, "", "B"), RouteGuardExit::SilentReject);
}

#[test]
fn test_malformed_graph_is_input_error() {
    let d = workspace();
    fs::write(d.path().join("graph.json"), r#"{ "edges": [{ "source": "A" }] }"#).unwrap();
    let err = handle_check(
        &session(&d),
        "A",
        "B",
        Some(&d.path().join("graph.json")),
        None,
        OutputFormat::Text,
    )
    .unwrap_err();
    assert_eq!(RouteGuardExit::from_error(&err), RouteGuardExit::InvalidInput);
}

#[test]
fn test_replay_exit_codes() {
    let d = workspace();
    let s = session(&d);
    let graph = d.path().join("graph.json");
    assert_eq!(
        handle_replay(&s, &graph, None, None, OutputFormat::Text).unwrap(),
        RouteGuardExit::Success
    );

    fs::write(
        d.path().join("loop.json"),
        r#"{ "edges": [{ "source": "C", "target": "A" }] }"#,
    )
    .unwrap();
    assert_eq!(
        handle_replay(&s, &d.path().join("loop.json"), Some(&graph), None, OutputFormat::Json).unwrap(),
        RouteGuardExit::Rejected
    );
}

#[test]
fn test_audit_exit_codes() {
    let d = workspace();
    let s = session(&d);
    fs::write(
        d.path().join("cyclic.json"),
        r#"{ "edges": [{ "source": "X", "target": "Y" }, { "source": "Y", "target": "X" }] }"#,
    )
    .unwrap();

    let clean = vec![d.path().join("graph.json")];
    assert_eq!(handle_audit(&s, &clean, OutputFormat::Text).unwrap(), RouteGuardExit::Success);

    let dirty = vec![d.path().join("graph.json"), d.path().join("cyclic.json")];
    assert_eq!(handle_audit(&s, &dirty, OutputFormat::Json).unwrap(), RouteGuardExit::Rejected);
}

#[test]
fn test_event_log_records_decisions() {
    let d = workspace();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[preferences]\nevent_log = true\nevent_log_path = \"log/events.jsonl\"\n",
    )
    .unwrap();
    check(&d, "C", "D");
    check(&d, "C", "A");

    let log = fs::read_to_string(Path::new(d.path()).join("log/events.jsonl")).unwrap();
    assert!(log.contains("\"connection_accepted\""));
    assert!(log.contains("\"connection_rejected\""));
    assert!(log.contains("\"rules_loaded\""));
}
