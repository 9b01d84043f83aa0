//! Axum route handlers for the Jobs API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::feed::{build_feed, FeedPage, FeedQuery};
use crate::jobs::publish::{publish_job, PublishOutcome};
use crate::matching::review::{rank_applicants, ApplicantReview};
use crate::state::AppState;

/// GET /api/v1/jobs
///
/// Published jobs, filtered, sorted and paginated per the query string.
pub async fn handle_job_feed(
    State(state): State<AppState>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<FeedPage>, AppError> {
    let Query(query) = query?;
    let jobs = state.jobs.list_published().await?;
    Ok(Json(build_feed(jobs, &query)))
}

/// POST /api/v1/jobs/:id/publish
///
/// Publishes the job. Candidate discovery outcome is reported alongside but
/// never turns a successful publish into an error.
pub async fn handle_publish_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<PublishOutcome>, AppError> {
    let outcome = publish_job(
        state.jobs.as_ref(),
        state.candidates.as_ref(),
        job_id,
        state.config.candidate_discovery_enabled,
    )
    .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/jobs/:id/applicants
///
/// Applicants for the job, scored and sorted best match first.
pub async fn handle_ranked_applicants(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApplicantReview>, AppError> {
    let job = state
        .jobs
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let applicants = state.candidates.list_applicants(job_id).await?;

    Ok(Json(rank_applicants(
        state.match_scorer.as_ref(),
        &job,
        &applicants,
    )))
}
