//! Data access — the query capabilities the matching and publish workflows
//! need, behind traits so they can be injected.
//!
//! `PgStore` is the Postgres implementation held in `AppState`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfileRow;
use crate::models::job::{JobPostingRow, STATUS_PUBLISHED};

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobPostingRow>, AppError>;

    /// Sets status to published and stamps `published_at`. Returns the updated row.
    async fn mark_published(&self, job_id: Uuid) -> Result<JobPostingRow, AppError>;

    async fn set_matched_candidate_count(&self, job_id: Uuid, count: i32)
        -> Result<(), AppError>;

    async fn list_published(&self) -> Result<Vec<JobPostingRow>, AppError>;
}

#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Active profiles whose field of study contains any of `keywords`
    /// (case-insensitive, ORed), at most `limit` rows, store order.
    async fn find_active_by_field_keywords(
        &self,
        keywords: &[&str],
        limit: i64,
    ) -> Result<Vec<CandidateProfileRow>, AppError>;

    /// Profiles that applied to `job_id`.
    async fn list_applicants(&self, job_id: Uuid) -> Result<Vec<CandidateProfileRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobPostingRow>, AppError> {
        Ok(
            sqlx::query_as::<_, JobPostingRow>("SELECT * FROM job_postings WHERE id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn mark_published(&self, job_id: Uuid) -> Result<JobPostingRow, AppError> {
        sqlx::query_as::<_, JobPostingRow>(
            r#"
            UPDATE job_postings
            SET status = $1, published_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(STATUS_PUBLISHED)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
    }

    async fn set_matched_candidate_count(
        &self,
        job_id: Uuid,
        count: i32,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE job_postings SET matched_candidates_count = $1 WHERE id = $2")
            .bind(count)
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_published(&self) -> Result<Vec<JobPostingRow>, AppError> {
        Ok(sqlx::query_as::<_, JobPostingRow>(
            "SELECT * FROM job_postings WHERE status = $1 ORDER BY published_at DESC NULLS LAST",
        )
        .bind(STATUS_PUBLISHED)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl CandidateStore for PgStore {
    async fn find_active_by_field_keywords(
        &self,
        keywords: &[&str],
        limit: i64,
    ) -> Result<Vec<CandidateProfileRow>, AppError> {
        let patterns: Vec<String> = keywords.iter().map(|k| format!("%{k}%")).collect();

        Ok(sqlx::query_as::<_, CandidateProfileRow>(
            r#"
            SELECT *
            FROM candidate_profiles
            WHERE is_active = TRUE
              AND field_of_study ILIKE ANY($1)
            LIMIT $2
            "#,
        )
        .bind(&patterns)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_applicants(&self, job_id: Uuid) -> Result<Vec<CandidateProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, CandidateProfileRow>(
            r#"
            SELECT cp.*
            FROM candidate_profiles cp
            JOIN applications a ON a.candidate_id = cp.id
            WHERE a.job_id = $1
            ORDER BY a.created_at ASC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store for tests
// ────────────────────────────────────────────────────────────────────────────
