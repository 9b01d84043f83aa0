use std::sync::Arc;

use crate::config::Config;
use crate::matching::match_scoring::MatchScorer;
use crate::store::{CandidateStore, JobStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
    pub candidates: Arc<dyn CandidateStore>,
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}
