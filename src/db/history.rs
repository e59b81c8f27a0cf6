use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use crate::domain::{DraftResult, Language};

/// Caller-side store of generated drafts. Backs the session history view and
/// the daily drafting quota.
#[derive(Clone)]
pub struct DraftHistoryRepository {
    pool: SqlitePool,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DraftRow {
    pub id: i64,
    pub subject: String,
    pub department: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl DraftHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn record(&self, draft: &DraftResult, language: Language) -> Result<i64> {
        // created_at is bound here rather than left to SQLite so that the
        // stored encoding matches the bound timestamps in count_since.
        let id = sqlx::query(
            r#"INSERT INTO drafts (subject, department, language, content, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5)"#,
        )
        .bind(&draft.subject)
        .bind(&draft.department)
        .bind(language.tag())
        .bind(&draft.content)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<DraftRow>> {
        let rows = sqlx::query_as::<_, DraftRow>(
            r#"SELECT id, subject, department, language, created_at
                FROM drafts ORDER BY created_at DESC, id DESC LIMIT ?1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Number of drafts recorded since the given instant, used to enforce the
    /// daily quota from local midnight.
    pub async fn count_since(&self, since: DateTime<Utc>) -> Result<i64> {
        let row: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM drafts WHERE created_at >= ?1"#)
            .bind(since)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
