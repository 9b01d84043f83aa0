//! Match Scoring — pluggable scorer that measures a candidate profile against a
//! job's field category.
//!
//! Default: `KeywordMatchScorer` (pure, deterministic, substring based).
//! `AppState` holds an `Arc<dyn MatchScorer>`.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

pub const FIELD_OF_STUDY_WEIGHT: u32 = 40;
pub const FIELD_OF_STUDY_PARTIAL: u32 = 20;
pub const SKILLS_WEIGHT: u32 = 30;
pub const POINTS_PER_SKILL: u32 = 10;
pub const EXPERIENCE_WEIGHT: u32 = 20;
pub const EDUCATION_WEIGHT: u32 = 10;
pub const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models
// ────────────────────────────────────────────────────────────────────────────

/// The textual parts of a candidate profile the scorer reads. All optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFields<'a> {
    pub field_of_study: Option<&'a str>,
    /// Comma-separated.
    pub skills: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub education: Option<&'a str>,
}

/// Per-component score for one candidate against one job category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub field_of_study: u32,
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    /// Sum of components, clamped to 0 – 100.
    pub total: u32,
    pub scorer_backend: String, // "keyword"
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the review or handler code.
pub trait MatchScorer: Send + Sync {
    fn score(&self, job_category: &str, profile: &ProfileFields<'_>) -> MatchBreakdown;
}

/// Substring-containment scorer with fixed weights:
/// field of study 40 (20 partial), skills up to 30, experience 20, education 10.
pub struct KeywordMatchScorer;

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, job_category: &str, profile: &ProfileFields<'_>) -> MatchBreakdown {
        compute_match_breakdown(job_category, profile)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_match_breakdown(job_category: &str, profile: &ProfileFields<'_>) -> MatchBreakdown {
    let category = job_category.trim().to_lowercase();
    let tokens: Vec<&str> = category.split_whitespace().collect();

    let Some(first_token) = tokens.first().copied() else {
        return breakdown(0, 0, 0, 0);
    };

    let field_of_study = match normalized(profile.field_of_study) {
        Some(field) if field.contains(&category) => FIELD_OF_STUDY_WEIGHT,
        Some(field) if field.contains(first_token) => FIELD_OF_STUDY_PARTIAL,
        _ => 0,
    };

    let matching_skills = profile
        .skills
        .unwrap_or_default()
        .split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .filter(|skill| tokens.iter().any(|token| skill.contains(token)))
        .count() as u32;
    let skills = (matching_skills * POINTS_PER_SKILL).min(SKILLS_WEIGHT);

    let experience = if mentions_any(profile.experience, &tokens) {
        EXPERIENCE_WEIGHT
    } else {
        0
    };

    let education = if mentions_any(profile.education, &tokens) {
        EDUCATION_WEIGHT
    } else {
        0
    };

    breakdown(field_of_study, skills, experience, education)
}

fn breakdown(field_of_study: u32, skills: u32, experience: u32, education: u32) -> MatchBreakdown {
    MatchBreakdown {
        field_of_study,
        skills,
        experience,
        education,
        total: (field_of_study + skills + experience + education).min(MAX_SCORE),
        scorer_backend: "keyword".to_string(),
    }
}

/// Lowercased text, or `None` when absent or blank.
fn normalized(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn mentions_any(text: Option<&str>, tokens: &[&str]) -> bool {
    normalized(text)
        .map(|t| tokens.iter().any(|token| t.contains(token)))
        .unwrap_or(false)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
