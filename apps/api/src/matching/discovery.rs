//! Candidate Discovery — publish-time, best-effort search for active candidates
//! whose field of study matches a newly published job.
//!
//! Nothing in here returns an error to the caller: every failure is logged and
//! reported as `DiscoveryOutcome::Failed`, so publishing never depends on it.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::taxonomy::{classify_job_field, FieldCategory};
use crate::models::candidate::CandidateProfileRow;
use crate::models::job::JobPostingRow;
use crate::store::{CandidateStore, JobStore};

/// Upper bound on candidates selected per published job.
pub const MAX_DISCOVERED_CANDIDATES: usize = 10;

/// Notification constructed for one matched candidate. Logged only; no
/// delivery channel exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateNotification {
    pub candidate_id: Uuid,
    pub candidate_email: String,
    pub job_id: Uuid,
    pub job_title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiscoveryOutcome {
    Completed {
        category: FieldCategory,
        matched_count: usize,
        notifications: Vec<CandidateNotification>,
    },
    NotRequested {
        reason: String,
    },
    Failed {
        reason: String,
    },
}

impl DiscoveryOutcome {
    pub fn matched_count(&self) -> usize {
        match self {
            DiscoveryOutcome::Completed { matched_count, .. } => *matched_count,
            _ => 0,
        }
    }
}

/// Runs discovery for a job that has just been published. Never fails.
pub async fn discover_candidates(
    jobs: &dyn JobStore,
    candidates: &dyn CandidateStore,
    job: &JobPostingRow,
) -> DiscoveryOutcome {
    match try_discover(jobs, candidates, job).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Candidate discovery for job {} failed: {e}", job.id);
            DiscoveryOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn try_discover(
    jobs: &dyn JobStore,
    candidates: &dyn CandidateStore,
    job: &JobPostingRow,
) -> Result<DiscoveryOutcome, AppError> {
    let category = classify_job_field(&job.title, job.description.as_deref());
    let keywords = category.keywords();

    let mut matched = if keywords.is_empty() {
        info!("Job {} classified as {category}; no field keywords to search", job.id);
        Vec::new()
    } else {
        candidates
            .find_active_by_field_keywords(keywords, MAX_DISCOVERED_CANDIDATES as i64)
            .await?
    };
    matched.truncate(MAX_DISCOVERED_CANDIDATES);

    jobs.set_matched_candidate_count(job.id, matched.len() as i32)
        .await?;

    let notifications: Vec<CandidateNotification> = matched
        .iter()
        .map(|candidate| build_notification(job, candidate))
        .collect();

    for notification in &notifications {
        info!(
            candidate_id = %notification.candidate_id,
            job_id = %notification.job_id,
            "Candidate notification: {}",
            notification.message
        );
    }

    info!(
        "Candidate discovery for job {} ({category}) matched {} candidates",
        job.id,
        notifications.len()
    );

    Ok(DiscoveryOutcome::Completed {
        category,
        matched_count: notifications.len(),
        notifications,
    })
}

fn build_notification(job: &JobPostingRow, candidate: &CandidateProfileRow) -> CandidateNotification {
    let greeting = candidate
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| format!("Hi {n}, "))
        .unwrap_or_default();

    CandidateNotification {
        candidate_id: candidate.id,
        candidate_email: candidate.email.clone(),
        job_id: job.id,
        job_title: job.title.clone(),
        message: format!(
            "{greeting}a new opportunity matching your field of study was just posted: {}",
            job.title
        ),
    }
}
