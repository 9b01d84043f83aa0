//! Job feed — filtering, sorting and pagination of published jobs.

use serde::{Deserialize, Serialize};

use crate::matching::taxonomy::classify_job_field;
use crate::models::job::JobPostingRow;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub search: Option<String>,
    /// Matches the stored tag or the classified field label.
    pub category: Option<String>,
    pub opportunity_type: Option<String>,
    #[serde(default)]
    pub sort: FeedSort,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub jobs: Vec<JobPostingRow>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
}

/// Applies `query` to `jobs`. Unpublished jobs are always dropped. Out-of-range
/// pages return an empty `jobs` list with correct totals.
pub fn build_feed(jobs: Vec<JobPostingRow>, query: &FeedQuery) -> FeedPage {
    let search = non_blank(query.search.as_deref());
    let category = non_blank(query.category.as_deref());
    let opportunity_type = non_blank(query.opportunity_type.as_deref());

    let mut filtered: Vec<JobPostingRow> = jobs
        .into_iter()
        .filter(JobPostingRow::is_published)
        .filter(|job| search.as_deref().map_or(true, |s| mentions(job, s)))
        .filter(|job| category.as_deref().map_or(true, |c| in_category(job, c)))
        .filter(|job| {
            opportunity_type
                .as_deref()
                .map_or(true, |t| job.opportunity_type.to_lowercase() == t)
        })
        .collect();

    match query.sort {
        FeedSort::Newest => filtered.sort_by(|a, b| listed_at(b).cmp(&listed_at(a))),
        FeedSort::Oldest => filtered.sort_by_key(listed_at),
        FeedSort::Title => filtered.sort_by_key(|job| job.title.to_lowercase()),
    }

    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let page = query.page.unwrap_or(1).max(1);
    let total = filtered.len();
    let total_pages = total.div_ceil(per_page as usize) as u32;

    let jobs = filtered
        .into_iter()
        .skip((page as usize - 1) * per_page as usize)
        .take(per_page as usize)
        .collect();

    FeedPage {
        jobs,
        page,
        per_page,
        total,
        total_pages,
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn mentions(job: &JobPostingRow, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

fn in_category(job: &JobPostingRow, category: &str) -> bool {
    if job
        .category_tag()
        .is_some_and(|tag| tag.to_lowercase() == category)
    {
        return true;
    }
    classify_job_field(&job.title, job.description.as_deref()).label() == category
}

fn listed_at(job: &JobPostingRow) -> chrono::DateTime<chrono::Utc> {
    job.published_at.unwrap_or(job.created_at)
}
