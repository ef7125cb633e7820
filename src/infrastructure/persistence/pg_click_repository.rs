//! PostgreSQL implementation of the click event log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    code: String,
    user_agent: String,
    ip: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for append-only click events.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, event: NewClickEvent) -> Result<(), AppError> {
        sqlx::query("INSERT INTO click_logs (code, user_agent, ip) VALUES ($1, $2, $3)")
            .bind(&event.code)
            .bind(&event.user_agent)
            .bind(&event.ip)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list_by_code(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, code, user_agent, ip, created_at
            FROM click_logs
            WHERE code = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(code)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ClickEvent::new(r.id, r.code, r.user_agent, r.ip, r.created_at))
            .collect())
    }
}
