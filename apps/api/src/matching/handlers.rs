//! Axum route handlers for the Matching API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::match_scoring::{MatchBreakdown, ProfileFields};
use crate::matching::taxonomy::{classify_job_field, FieldCategory};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: FieldCategory,
    pub keywords: Vec<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateProfileInput {
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub category: String,
    #[serde(default)]
    pub profile: CandidateProfileInput,
}

/// POST /api/v1/matching/classify
pub async fn handle_classify(
    request: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(request) = request?;
    let category = classify_job_field(&request.title, request.description.as_deref());
    Ok(Json(ClassifyResponse {
        category,
        keywords: category.keywords().to_vec(),
    }))
}

/// POST /api/v1/matching/score
///
/// Scores an ad-hoc profile against a category. Useful for previewing how an
/// applicant will rank. A blank category scores zero.
pub async fn handle_score(
    State(state): State<AppState>,
    request: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<MatchBreakdown>, AppError> {
    let Json(request) = request?;

    let profile = ProfileFields {
        field_of_study: request.profile.field_of_study.as_deref(),
        skills: request.profile.skills.as_deref(),
        experience: request.profile.experience.as_deref(),
        education: request.profile.education.as_deref(),
    };

    Ok(Json(state.match_scorer.score(&request.category, &profile)))
}
