//! End-to-end: run the smoke test against a real server on an ephemeral port.

use std::net::SocketAddr;

use bridge_server::BridgeServer;
use bridge_test_utils::{compiled_document, hierarchical_document, partial_stylesheet, ServedRoot};
use bridge_validator::{Expectations, Outcome, SmokeTest};
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

async fn run_against(root: &ServedRoot) -> (Outcome, String) {
    let (stop, stopped) = oneshot::channel::<()>();
    let server = BridgeServer::new(root.path()).unwrap();
    let (addr, running) = server
        .bind(([127, 0, 0, 1], 0).into(), async {
            stopped.await.ok();
        })
        .unwrap();
    let handle = tokio::spawn(running);

    let outcome = smoke_at(addr).await;

    stop.send(()).unwrap();
    handle.await.unwrap();
    outcome
}

async fn smoke_at(addr: SocketAddr) -> (Outcome, String) {
    let smoke = SmokeTest::new(Expectations::new().with_base_url(format!("http://{addr}"))).unwrap();
    let mut out = Vec::new();
    let outcome = smoke.run(&mut out).await.unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn full_document_passes() {
    let root = ServedRoot::with_document(&hierarchical_document(22));
    let (outcome, report) = run_against(&root).await;

    let Outcome::Completed(summary) = outcome else {
        panic!("run should complete:\n{report}");
    };
    assert_eq!(summary.found, 22);
    assert!(summary.passed());
    assert!(report.contains("✓ data.json loads correctly"));
    assert!(report.contains("✓ Found 22 hierarchical table sections"));
    assert!(report.contains("    Levels: true, Children: true, Cell types: true"));
    assert!(!report.contains("Levels: false"));
    assert!(report.contains("✓ Found section with 1c1d1n: 1c1d1n"));
    assert!(report.contains("    [0] 2c: responder, level 1, children: true"));
    assert!(report.contains(
        "✓ CSS loaded. Opener green: true, Responder blue: true, Indentation: true"
    ));
    assert!(report.contains("Status: ✓ PASS"));
    assert!(report.ends_with("Test completed successfully!\n"));
}

#[tokio::test]
async fn compiled_document_has_no_tables_and_is_incomplete() {
    let root = ServedRoot::with_document(&compiled_document());
    let (outcome, report) = run_against(&root).await;

    let Outcome::Completed(summary) = outcome else {
        panic!("run should complete:\n{report}");
    };
    assert_eq!(summary.found, 0);
    assert_eq!(outcome.exit_code(), 0);
    assert!(report.contains("Hierarchical tables found: 0"));
    assert!(report.contains("✗ Could not find specific 1c1d1n section"));
    assert!(report.contains("Status: ✗ INCOMPLETE"));
}

#[tokio::test]
async fn missing_stylesheet_is_noted_and_run_continues() {
    let root = ServedRoot::with_document(&hierarchical_document(18)).without("styles.css");
    let (outcome, report) = run_against(&root).await;

    assert!(matches!(outcome, Outcome::Completed(summary) if summary.passed()));
    assert!(report.contains("✗ styles.css returned status code 404"));
}

#[tokio::test]
async fn partial_stylesheet_reports_each_requirement() {
    let root =
        ServedRoot::with_document(&hierarchical_document(1)).file("styles.css", partial_stylesheet());
    let (_, report) = run_against(&root).await;

    assert!(report.contains(
        "✓ CSS loaded. Opener green: true, Responder blue: false, Indentation: true"
    ));
}

#[tokio::test]
async fn missing_data_is_fatal() {
    let root = ServedRoot::with_document(&hierarchical_document(1)).without("data.json");
    let (outcome, report) = run_against(&root).await;

    assert_eq!(outcome, Outcome::Fatal);
    assert_eq!(outcome.exit_code(), 1);
    assert!(report.contains("✓ Server is running on port"));
    assert!(report.contains("✗ data.json returned status code 404"));
    assert!(!report.contains("--- Testing hierarchical structure ---"));
}

#[tokio::test]
async fn empty_array_data_is_fatal() {
    let root = ServedRoot::with_document(&hierarchical_document(1)).file("data.json", "[]");
    let (outcome, report) = run_against(&root).await;

    assert_eq!(outcome, Outcome::Fatal);
    assert!(report.contains("✓ data.json loads correctly"));
    assert!(!report.contains("--- Testing hierarchical structure ---"));
}

#[tokio::test]
async fn unreachable_server_is_fatal() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (outcome, report) = smoke_at(addr).await;
    assert_eq!(outcome, Outcome::Fatal);
    assert!(report.starts_with("=== Bridge System Hierarchical Implementation Test ===\n\n"));
    assert!(report.contains("✗ Server not accessible: "));
}
