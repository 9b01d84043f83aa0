//! Publish workflow — moves a job to published and runs candidate discovery as
//! a best-effort follow-up. The publish result never depends on discovery.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::discovery::{discover_candidates, DiscoveryOutcome};
use crate::store::{CandidateStore, JobStore};

#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    pub job_id: Uuid,
    pub status: String,
    pub discovery: DiscoveryOutcome,
}

pub async fn publish_job(
    jobs: &dyn JobStore,
    candidates: &dyn CandidateStore,
    job_id: Uuid,
    discovery_enabled: bool,
) -> Result<PublishOutcome, AppError> {
    let existing = jobs
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    if existing.is_published() {
        return Err(AppError::Conflict(format!("Job {job_id} is already published")));
    }

    let job = jobs.mark_published(job_id).await?;
    info!("Published job {} ({})", job.id, job.title);

    let discovery = if !discovery_enabled {
        DiscoveryOutcome::NotRequested {
            reason: "candidate discovery is disabled".to_string(),
        }
    } else if !job.wants_candidate_discovery() {
        DiscoveryOutcome::NotRequested {
            reason: "candidate matching is not enabled for this job".to_string(),
        }
    } else {
        discover_candidates(jobs, candidates, &job).await
    };

    info!(
        "Publish of job {} complete; discovery matched {} candidates",
        job.id,
        discovery.matched_count()
    );

    Ok(PublishOutcome {
        job_id: job.id,
        status: job.status,
        discovery,
    })
}
