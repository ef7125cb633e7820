#![allow(dead_code)]

use axum::extract::connect_info::MockConnectInfo;
use axum::http::HeaderName;
use axum_test::TestServer;
use deep_link_router::domain::entities::NewLink;
use deep_link_router::domain::platform::PlatformDetector;
use deep_link_router::domain::repositories::LinkRepository;
use deep_link_router::infrastructure::memory::InMemoryStore;
use deep_link_router::routes::router;
use deep_link_router::state::{AppState, HttpSettings};
use deep_link_router::utils::id_generator::RandomIdGenerator;
use std::net::SocketAddr;
use std::sync::Arc;

pub const BASE_URL: &str = "https://go.example.com";
pub const PEER_ADDR: &str = "127.0.0.1:12345";

pub const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
pub const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub fn default_settings() -> HttpSettings {
    HttpSettings {
        base_url: BASE_URL.to_string(),
        client_ip_header: None,
        admin_token_hash: None,
        storage: "memory",
    }
}

pub fn create_test_state(store: Arc<InMemoryStore>, settings: HttpSettings) -> AppState {
    AppState::new(
        store.into_link_store(),
        PlatformDetector::default(),
        Arc::new(RandomIdGenerator::default()),
        5,
        settings,
    )
}

/// Full router over a fresh in-memory store, with a fixed peer address.
pub fn make_server_with(settings: HttpSettings) -> (TestServer, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = create_test_state(store.clone(), settings);

    let peer: SocketAddr = PEER_ADDR.parse().unwrap();
    let app = router(state).layer(MockConnectInfo(peer));

    (TestServer::new(app).unwrap(), store)
}

pub fn make_server() -> (TestServer, Arc<InMemoryStore>) {
    make_server_with(default_settings())
}

pub fn behind_proxy(header: &'static str) -> HttpSettings {
    HttpSettings {
        client_ip_header: Some(HeaderName::from_static(header)),
        ..default_settings()
    }
}

pub async fn create_test_link(
    store: &InMemoryStore,
    code: &str,
    ios: Option<&str>,
    android: Option<&str>,
    fallback: Option<&str>,
) {
    store
        .create(NewLink {
            code: code.to_string(),
            ios_url: ios.map(str::to_string),
            android_url: android.map(str::to_string),
            fallback_url: fallback.map(str::to_string),
        })
        .await
        .unwrap();
}
