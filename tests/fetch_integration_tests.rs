use std::time::Duration;

use roster::swapi::{FetchError, FetchProgress, SwapiClient, fetch_all};
use serde_json::json;
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client() -> SwapiClient {
    SwapiClient::new(Duration::from_secs(5)).unwrap()
}

fn person(name: &str, eye_color: &str, created: &str) -> serde_json::Value {
    json!({
        "name": name,
        "height": "172",
        "eye_color": eye_color,
        "created": created,
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": "https://swapi.dev/api/people/1/"
    })
}

/// Mounts a page at `page_path` that expects to be requested exactly once.
async fn mount_page(server: &MockServer, page_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn names(characters: &[roster::swapi::Character]) -> Vec<&str> {
    characters.iter().map(|c| c.name.as_str()).collect()
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_fetch_follows_next_links() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    mount_page(
        &mock_server,
        "/api/people/",
        json!({
            "count": 3,
            "next": format!("{}/api/people/page2", mock_server.uri()),
            "previous": null,
            "results": [
                person("Luke Skywalker", "blue", "2014-12-09T13:50:51.644000Z"),
                person("C-3PO", "yellow", "2014-12-10T15:10:51.357000Z"),
            ]
        }),
    )
    .await;
    mount_page(
        &mock_server,
        "/api/people/page2",
        json!({
            "count": 3,
            "next": null,
            "previous": base_url,
            "results": [person("R2-D2", "red", "2014-12-10T15:11:50.376000Z")]
        }),
    )
    .await;

    let characters = fetch_all(&client(), &base_url, None).await.unwrap();

    assert_eq!(names(&characters), vec!["Luke Skywalker", "C-3PO", "R2-D2"]);
    assert_eq!(characters[0].eye_color, "blue");
    assert_eq!(characters[2].created, "2014-12-10T15:11:50.376000Z");
}

#[tokio::test]
async fn test_fetch_reports_progress_per_page() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    mount_page(
        &mock_server,
        "/api/people/",
        json!({
            "count": 2,
            "next": format!("{}/api/people/page2", mock_server.uri()),
            "results": [person("Luke Skywalker", "blue", "2014-12-09T13:50:51.644000Z")]
        }),
    )
    .await;
    mount_page(
        &mock_server,
        "/api/people/page2",
        json!({
            "count": 2,
            "next": null,
            "results": [person("Leia Organa", "brown", "2014-12-10T15:20:09.791000Z")]
        }),
    )
    .await;

    let (tx, mut rx) = mpsc::channel(8);
    let characters = fetch_all(&client(), &base_url, Some(&tx)).await.unwrap();
    drop(tx);

    let mut reports = Vec::new();
    while let Some(report) = rx.recv().await {
        reports.push(report);
    }

    assert_eq!(characters.len(), 2);
    assert_eq!(
        reports,
        vec![
            FetchProgress { pages: 1, loaded: 1, total: 2 },
            FetchProgress { pages: 2, loaded: 2, total: 2 },
        ]
    );
}

#[tokio::test]
async fn test_fetch_empty_next_terminates() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    mount_page(
        &mock_server,
        "/api/people/",
        json!({
            "count": 1,
            "next": "",
            "results": [person("Yoda", "brown", "2014-12-15T12:26:01.042000Z")]
        }),
    )
    .await;

    let characters = fetch_all(&client(), &base_url, None).await.unwrap();
    assert_eq!(names(&characters), vec!["Yoda"]);
}

#[tokio::test]
async fn test_fetch_empty_listing() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    mount_page(
        &mock_server,
        "/api/people/",
        json!({ "count": 0, "next": null, "results": [] }),
    )
    .await;

    let characters = fetch_all(&client(), &base_url, None).await.unwrap();
    assert!(characters.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_fetch_server_error_discards_partial_results() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    mount_page(
        &mock_server,
        "/api/people/",
        json!({
            "count": 2,
            "next": format!("{}/api/people/page2", mock_server.uri()),
            "results": [person("Luke Skywalker", "blue", "2014-12-09T13:50:51.644000Z")]
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/people/page2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetch_all(&client(), &base_url, None).await;

    match result {
        Err(FetchError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_json() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"results\": [oops"))
        .mount(&mock_server)
        .await;

    let result = fetch_all(&client(), &base_url, None).await;
    assert!(matches!(result, Err(FetchError::Parse(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_fetch_missing_results_is_parse_error() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/api/people/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "Not found" })))
        .mount(&mock_server)
        .await;

    let result = fetch_all(&client(), &base_url, None).await;
    assert!(matches!(result, Err(FetchError::Parse(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Nothing listens on port 1
    let result = fetch_all(&client(), "http://127.0.0.1:1/api/people/", None).await;

    match result {
        Err(e @ FetchError::Network(_)) => {
            assert!(e.to_string().starts_with("network error"));
        }
        other => panic!("Expected Network error, got {:?}", other),
    }
}
