mod common;

use serde_json::Value;
use url_alias::domain::repositories::AliasRepository;

#[tokio::test]
async fn test_api_shorten_with_alias() {
    let app = common::spawn_app();

    let response = app
        .server
        .get("/api/shorten")
        .add_query_param("link", "https://example.com")
        .add_query_param("alias", "docs")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["alias"], "docs");
    assert_eq!(json["secret"].as_str().unwrap().len(), 32);

    let stored = app.store.find_by_alias("docs").await.unwrap().unwrap();
    assert_eq!(stored.target, "https://example.com");
    assert_eq!(stored.secret, json["secret"]);
}

#[tokio::test]
async fn test_api_shorten_generates_alias() {
    let app = common::spawn_app();

    let response = app
        .server
        .get("/api/shorten")
        .add_query_param("link", "https://example.com")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 5);
    assert!(
        alias
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );
}

#[tokio::test]
async fn test_api_shorten_alias_too_long() {
    let app = common::spawn_app();

    let response = app
        .server
        .get("/api/shorten")
        .add_query_param("link", "https://example.com")
        .add_query_param("alias", "abcdefghijk")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Alias too long.");
    assert_eq!(app.store.alias_count(), 0);
}

#[tokio::test]
async fn test_api_shorten_non_ascii_url() {
    let app = common::spawn_app();

    let response = app
        .server
        .get("/api/shorten")
        .add_query_param("link", "https://exämple.com")
        .add_query_param("alias", "uni")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL must be ASCII.");
}

#[tokio::test]
async fn test_api_shorten_reserved_alias() {
    let app = common::spawn_app();

    for reserved in ["robots.txt", "favicon.ico", "sitemap.xml"] {
        let response = app
            .server
            .get("/api/shorten")
            .add_query_param("link", "https://example.com")
            .add_query_param("alias", reserved)
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "Alias is blocked.");
    }
}

#[tokio::test]
async fn test_api_shorten_duplicate_alias_keeps_original() {
    let app = common::spawn_app();
    common::create_test_alias(&app.store, "taken", "https://original.com", "s1").await;

    let response = app
        .server
        .get("/api/shorten")
        .add_query_param("link", "https://intruder.com")
        .add_query_param("alias", "taken")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Alias already exists.");

    let stored = app.store.find_by_alias("taken").await.unwrap().unwrap();
    assert_eq!(stored.target, "https://original.com");
    assert_eq!(stored.secret, "s1");
}

#[tokio::test]
async fn test_api_shorten_missing_link() {
    let app = common::spawn_app();

    let response = app.server.get("/api/shorten").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "URL is required.");
}

#[tokio::test]
async fn test_form_shorten_shows_alias_and_secret() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .form(&[("link", "https://example.com"), ("alias", "mine")])
        .await;

    response.assert_status_ok();

    let stored = app.store.find_by_alias("mine").await.unwrap().unwrap();
    let html = response.text();
    assert!(html.contains("/mine"));
    assert!(html.contains(&format!("/delete/{}", stored.secret)));
}

#[tokio::test]
async fn test_form_shorten_blank_alias_generates() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .form(&[("link", "https://example.com"), ("alias", "   ")])
        .await;

    response.assert_status_ok();
    assert_eq!(app.store.alias_count(), 1);
}

#[tokio::test]
async fn test_form_shorten_validation_error_page() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .form(&[("link", "https://example.com"), ("alias", "café")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Alias must be ASCII."));
}

#[tokio::test]
async fn test_home_page_renders_form() {
    let app = common::spawn_app();

    let response = app.server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form"));
}

#[tokio::test]
async fn test_form_shorten_link_is_percent_encoded() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/")
        .form(&[("link", "https://example.com"), ("alias", "a b?c#d")])
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"href="/a%20b%3Fc%23d""#));
}
