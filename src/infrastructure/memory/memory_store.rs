//! DashMap-backed implementation of all Link Store repositories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use crate::domain::entities::{ClickEvent, Link, NewClickEvent, NewLink, NewShortLink, ShortLink};
use crate::domain::repositories::{ClickRepository, LinkRepository, LinkStore, ShortLinkRepository};
use crate::error::AppError;

/// A stored value tagged with its insertion sequence.
///
/// The sequence breaks ties between records created within the same clock
/// tick so listings stay in a stable newest-first order.
#[derive(Debug, Clone)]
struct Sequenced<T> {
    seq: u64,
    value: T,
}

/// In-memory storage for deep links, short links and click events.
///
/// DashMap's entry API gives atomic check-and-insert per key, which is what
/// the uniqueness guarantees on `code` and `id` need.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    links: DashMap<String, Sequenced<Link>>,
    short_links: DashMap<String, Sequenced<ShortLink>>,
    clicks: DashMap<String, Vec<ClickEvent>>,
    seq: AtomicU64,
    click_id: AtomicI64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a shared store into a [`LinkStore`] handle.
    pub fn into_link_store(self: Arc<Self>) -> LinkStore {
        LinkStore::new(self.clone(), self.clone(), self)
    }

    /// Total number of click events across all codes.
    pub fn click_count(&self) -> usize {
        self.clicks.iter().map(|entry| entry.value().len()).sum()
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }
}

fn newest_first<T: Clone>(
    map: &DashMap<String, Sequenced<T>>,
    created_at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
    let mut items: Vec<Sequenced<T>> = map.iter().map(|entry| entry.value().clone()).collect();
    items.sort_by(|a, b| {
        created_at(&b.value)
            .cmp(&created_at(&a.value))
            .then(b.seq.cmp(&a.seq))
    });
    items.into_iter().map(|s| s.value).collect()
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_pkey" }),
            )),
            Entry::Vacant(slot) => {
                let link = Link::new(
                    new_link.code,
                    new_link.ios_url,
                    new_link.android_url,
                    new_link.fallback_url,
                    Utc::now(),
                );
                slot.insert(Sequenced {
                    seq: self.next_seq(),
                    value: link.clone(),
                });
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().value.clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(newest_first(&self.links, |l| l.created_at))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.remove(code).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        match self.short_links.entry(new_link.id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "shortened_links_pkey" }),
            )),
            Entry::Vacant(slot) => {
                let link = ShortLink::new(new_link.id, new_link.original_url, Utc::now());
                slot.insert(Sequenced {
                    seq: self.next_seq(),
                    value: link.clone(),
                });
                Ok(link)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.short_links.get(id).map(|entry| entry.value().value.clone()))
    }

    async fn list(&self) -> Result<Vec<ShortLink>, AppError> {
        Ok(newest_first(&self.short_links, |l| l.created_at))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.short_links.remove(id).is_some())
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn append(&self, event: NewClickEvent) -> Result<(), AppError> {
        let click = ClickEvent::new(
            self.click_id.fetch_add(1, Ordering::Relaxed) + 1,
            event.code.clone(),
            event.user_agent,
            event.ip,
            Utc::now(),
        );
        self.clicks.entry(event.code).or_default().push(click);
        Ok(())
    }

    async fn list_by_code(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .clicks
            .get(code)
            .map(|events| events.value().iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
