use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_PUBLISHED: &str = "published";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub title: String,
    /// Rich text; may contain HTML markup.
    pub description: Option<String>,
    /// Free-text or taxonomy tag set by the employer.
    pub category: Option<String>,
    pub opportunity_type: String,
    pub status: String,
    pub enable_candidate_matching: bool,
    pub enable_prescreening: bool,
    pub matched_candidates_count: i32,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl JobPostingRow {
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }

    /// Whether publishing this job should look for candidates to notify.
    pub fn wants_candidate_discovery(&self) -> bool {
        self.enable_candidate_matching || self.enable_prescreening
    }

    /// The stored category tag, if it carries any text.
    pub fn category_tag(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
