mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use deep_link_router::domain::entities::{Link, NewLink};
use deep_link_router::domain::platform::PlatformDetector;
use deep_link_router::domain::repositories::{LinkRepository, LinkStore};
use deep_link_router::error::AppError;
use deep_link_router::infrastructure::memory::InMemoryStore;
use deep_link_router::routes::router;
use deep_link_router::state::AppState;
use deep_link_router::utils::id_generator::RandomIdGenerator;
use serde_json::{Value, json};
use std::sync::Arc;

/// Link repository whose store is unreachable.
struct UnreachableLinks;

#[async_trait]
impl LinkRepository for UnreachableLinks {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

fn unreachable_server() -> TestServer {
    let memory = Arc::new(InMemoryStore::new());
    let store = LinkStore::new(Arc::new(UnreachableLinks), memory.clone(), memory);
    let state = AppState::new(
        store,
        PlatformDetector::default(),
        Arc::new(RandomIdGenerator::default()),
        5,
        common::default_settings(),
    );
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_health_memory_store() {
    let (server, _store) = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["store"]["message"], "memory reachable");
}

#[tokio::test]
async fn test_health_degraded_when_store_unreachable() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_lookup_failure_is_internal_error_without_details() {
    let server = unreachable_server();

    let response = server.get("/anything").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}
