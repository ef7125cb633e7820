mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_short_link() {
    let (server, _store) = common::make_server();

    let response = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "https://long.example/a/b/c?x=1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(body["original_url"], "https://long.example/a/b/c?x=1");
    assert_eq!(body["short_url"], format!("{}/s/{}", common::BASE_URL, id));
}

#[tokio::test]
async fn test_created_short_link_redirects() {
    let (server, _store) = common::make_server();

    let body = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "https://long.example/path" }))
        .await
        .json::<Value>();
    let id = body["id"].as_str().unwrap();

    let response = server.get(&format!("/s/{id}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://long.example/path");
}

#[tokio::test]
async fn test_create_short_link_rejects_empty_url() {
    let (server, _store) = common::make_server();

    let response = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_short_link_keeps_whitespace_url_verbatim() {
    let (server, _store) = common::make_server();

    let response = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "  " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["original_url"], "  ");
}

#[tokio::test]
async fn test_same_url_gets_distinct_ids() {
    let (server, _store) = common::make_server();

    let first = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "https://same.example" }))
        .await
        .json::<Value>();
    let second = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "https://same.example" }))
        .await
        .json::<Value>();

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_list_get_and_delete_short_links() {
    let (server, _store) = common::make_server();

    let created = server
        .post("/api/short-links")
        .json(&json!({ "original_url": "https://one.example" }))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap().to_string();

    server
        .post("/api/short-links")
        .json(&json!({ "original_url": "https://two.example" }))
        .await;

    let list = server.get("/api/short-links").await.json::<Value>();
    assert_eq!(list["total"], 2);
    assert_eq!(list["items"][0]["original_url"], "https://two.example");

    let shown = server
        .get(&format!("/api/short-links/{id}"))
        .await
        .json::<Value>();
    assert_eq!(shown["original_url"], "https://one.example");

    server
        .delete(&format!("/api/short-links/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/s/{id}"))
        .await
        .assert_status_not_found();

    // Deleting again is still a no-op success.
    server
        .delete(&format!("/api/short-links/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_short_link_not_found() {
    let (server, _store) = common::make_server();

    server
        .get("/api/short-links/missing")
        .await
        .assert_status_not_found();
}
