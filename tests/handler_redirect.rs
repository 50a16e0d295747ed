mod common;

use std::time::Duration;
use url_alias::domain::visit_worker::{VisitWorkerConfig, run_visit_worker};

#[tokio::test]
async fn test_redirect_success() {
    let app = common::spawn_app();
    common::create_test_alias(&app.store, "go", "https://example.com/target", "s").await;

    let response = app.server.get("/go").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let mut app = common::spawn_app();

    let response = app.server.get("/nothing").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Alias not found!"));
    assert!(app.visits.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_records_one_visit() {
    let mut app = common::spawn_app();
    common::create_test_alias(&app.store, "clickme", "https://example.com", "s").await;

    let before = chrono::Utc::now().timestamp();
    let response = app.server.get("/clickme").await;
    assert_eq!(response.status_code(), 307);

    let visit = app.visits.try_recv().unwrap();
    assert_eq!(visit.alias, "clickme");
    assert!(visit.timestamp >= before);
    assert!(app.visits.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_survives_full_visit_queue() {
    let app = common::spawn_app();
    common::create_test_alias(&app.store, "busy", "https://example.com", "s").await;

    // Nobody drains the queue (capacity 100); redirects must keep working.
    for _ in 0..150 {
        let response = app.server.get("/busy").await;
        assert_eq!(response.status_code(), 307);
    }
}

#[tokio::test]
async fn test_redirect_visit_persisted_by_worker() {
    let app = common::spawn_app();
    common::create_test_alias(&app.store, "tracked", "https://example.com", "s").await;

    let store = app.store.clone();
    tokio::spawn(run_visit_worker(
        app.visits,
        store.clone(),
        VisitWorkerConfig::default(),
    ));

    app.server.get("/tracked").await;

    let mut recorded = Vec::new();
    for _ in 0..50 {
        recorded = store.visits();
        if !recorded.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].alias, "tracked");
}

#[tokio::test]
async fn test_redirect_to_unsendable_target_is_captured() {
    let app = common::spawn_app();

    app.server
        .get("/api/shorten")
        .add_query_param("link", "https://example.com/a\u{1}b")
        .add_query_param("alias", "ctl")
        .await
        .assert_status_ok();

    let response = app.server.get("/ctl").await;

    response.assert_status_internal_server_error();

    let records = app.store.error_records();
    assert_eq!(records.len(), 1);
    assert!(records[0].detail.contains("GET /ctl"));
    assert!(records[0].detail.contains("Location"));

    let html = response.text();
    assert!(html.contains("Internal server error"));
    assert!(html.contains(&records[0].id));
}
