// Matching core: field classification, match scoring, candidate discovery and
// applicant ranking. Classification and scoring are pure; discovery and the
// handlers reach the database only through the `store` traits.

pub mod discovery;
pub mod handlers;
pub mod match_scoring;
pub mod review;
pub mod taxonomy;
