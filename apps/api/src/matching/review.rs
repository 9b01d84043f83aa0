//! Applicant review — scores, ranks and badges a job's applicants for the
//! employer review screen. Display only; no side effects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::match_scoring::{MatchBreakdown, MatchScorer};
use crate::matching::taxonomy::{classify_job_field, FieldCategory};
use crate::models::candidate::CandidateProfileRow;
use crate::models::job::JobPostingRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => MatchTier::Excellent,
            60..=79 => MatchTier::Good,
            40..=59 => MatchTier::Fair,
            _ => MatchTier::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedApplicant {
    pub candidate_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub score: u32,
    pub tier: MatchTier,
    pub breakdown: MatchBreakdown,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantReview {
    pub job_id: Uuid,
    pub matched_field_category: String,
    pub applicants: Vec<RankedApplicant>,
}

/// The category string applicants are scored against: the job's stored tag
/// when present (canonicalised if it names a taxonomy field), otherwise its
/// classified field label.
pub fn review_category(job: &JobPostingRow) -> String {
    match job.category_tag() {
        Some(tag) => FieldCategory::from_label(tag)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| tag.to_string()),
        None => classify_job_field(&job.title, job.description.as_deref())
            .label()
            .to_string(),
    }
}

/// Scores every applicant and sorts by score, highest first. Ties keep
/// application order.
pub fn rank_applicants(
    scorer: &dyn MatchScorer,
    job: &JobPostingRow,
    applicants: &[CandidateProfileRow],
) -> ApplicantReview {
    let category = review_category(job);

    let mut ranked: Vec<RankedApplicant> = applicants
        .iter()
        .map(|candidate| {
            let breakdown = scorer.score(&category, &candidate.profile_fields());
            let tier = MatchTier::from_score(breakdown.total);
            RankedApplicant {
                candidate_id: candidate.id,
                email: candidate.email.clone(),
                full_name: candidate.full_name.clone(),
                score: breakdown.total,
                tier,
                summary: build_summary(&breakdown),
                breakdown,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    ApplicantReview {
        job_id: job.id,
        matched_field_category: category,
        applicants: ranked,
    }
}

fn build_summary(breakdown: &MatchBreakdown) -> String {
    let mut strengths = Vec::new();
    if breakdown.field_of_study > 0 {
        strengths.push("field of study");
    }
    if breakdown.skills > 0 {
        strengths.push("skills");
    }
    if breakdown.experience > 0 {
        strengths.push("experience");
    }
    if breakdown.education > 0 {
        strengths.push("education");
    }

    if strengths.is_empty() {
        format!("{}/100. No overlap with the job's field.", breakdown.total)
    } else {
        format!("{}/100. Matches on {}.", breakdown.total, strengths.join(", "))
    }
}
