use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::match_scoring::ProfileFields;

/// A submitted CV. Upserted by email on resubmission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateProfileRow {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub field_of_study: Option<String>,
    /// Comma-separated free text.
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CandidateProfileRow {
    pub fn profile_fields(&self) -> ProfileFields<'_> {
        ProfileFields {
            field_of_study: self.field_of_study.as_deref(),
            skills: self.skills.as_deref(),
            experience: self.experience.as_deref(),
            education: self.education.as_deref(),
        }
    }
}
