//! Shared application state injected into every handler.

use axum::http::HeaderName;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::application::services::{ClickLogger, DeepLinkService, ShortLinkService};
use crate::config::{Config, StorageBackend};
use crate::domain::platform::PlatformDetector;
use crate::domain::repositories::LinkStore;
use crate::utils::id_generator::{IdGenerator, RandomIdGenerator};

/// Request-facing settings that are not owned by any service.
#[derive(Debug, Clone, Default)]
pub struct HttpSettings {
    /// Public origin used to build absolute short URLs.
    pub base_url: String,
    /// Header holding the client address, set only behind a trusted proxy.
    pub client_ip_header: Option<HeaderName>,
    /// SHA-256 of the admin bearer token; `None` leaves `/api` open.
    pub admin_token_hash: Option<Vec<u8>>,
    /// Backend name reported by the health endpoint.
    pub storage: &'static str,
}

impl HttpSettings {
    /// Builds the short URL for an id, e.g. `https://s.example.com/s/aB3_x-`.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/s/{}", self.base_url.trim_end_matches('/'), id)
    }

    /// Stores only the digest of the admin token.
    pub fn with_admin_token(mut self, token: Option<&str>) -> Self {
        self.admin_token_hash = token.map(hash_token);
        self
    }
}

/// Hashes a bearer token for comparison against [`HttpSettings::admin_token_hash`].
pub fn hash_token(token: &str) -> Vec<u8> {
    Sha256::digest(token.as_bytes()).to_vec()
}

#[derive(Clone)]
pub struct AppState {
    pub deep_link_service: Arc<DeepLinkService>,
    pub short_link_service: Arc<ShortLinkService>,
    pub click_logger: Arc<ClickLogger>,
    pub settings: Arc<HttpSettings>,
}

impl AppState {
    /// Wires the services over one [`LinkStore`].
    pub fn new(
        store: LinkStore,
        detector: PlatformDetector,
        generator: Arc<dyn IdGenerator>,
        max_attempts: usize,
        settings: HttpSettings,
    ) -> Self {
        let click_logger = Arc::new(ClickLogger::new(store.clicks));

        let deep_link_service = Arc::new(DeepLinkService::new(
            store.links,
            detector,
            click_logger.clone(),
        ));

        let short_link_service = Arc::new(ShortLinkService::new(
            store.short_links,
            generator,
            max_attempts,
        ));

        Self {
            deep_link_service,
            short_link_service,
            click_logger,
            settings: Arc::new(settings),
        }
    }

    /// Builds the state from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a platform token list cannot be compiled.
    pub fn from_config(store: LinkStore, config: &Config) -> anyhow::Result<Self> {
        let detector = PlatformDetector::new(&config.platform_rules)?;

        let settings = HttpSettings {
            base_url: config.base_url.clone(),
            client_ip_header: config.client_ip_header_name(),
            admin_token_hash: None,
            storage: match config.storage_backend {
                StorageBackend::Postgres => "postgres",
                StorageBackend::Memory => "memory",
            },
        }
        .with_admin_token(config.admin_token.as_deref());

        Ok(Self::new(
            store,
            detector,
            Arc::new(RandomIdGenerator::new(config.short_id_length)),
            config.short_id_max_attempts,
            settings,
        ))
    }
}
