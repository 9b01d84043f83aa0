// Job board workflows: public feed, publishing, applicant review endpoints.

pub mod feed;
pub mod handlers;
pub mod publish;
