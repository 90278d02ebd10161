use async_trait::async_trait;

use crate::modules::interview::application::ports::outgoing::interview_query::{
    PageRequest, PageResult,
};
use crate::modules::interview::domain::entities::{Interview, InterviewMode, InterviewStatus};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInterviewsError {
    /// An empty page answers not-found rather than an empty collection.
    #[error("No interviews found")]
    NoInterviewsFound,

    #[error("Candidate not found with id: {0}")]
    CandidateNotFound(i64),

    #[error("Validation service unavailable: {0}")]
    ValidatorUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Paginated read side. Content and total are cached independently, so a
/// composed page may pair a list and a count captured at slightly different
/// moments; that window is accepted.
#[async_trait]
pub trait ListInterviewsUseCase: Send + Sync {
    async fn all(&self, page: PageRequest) -> Result<PageResult<Interview>, ListInterviewsError>;

    async fn by_candidate(
        &self,
        candidate_id: i64,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError>;

    async fn by_status(
        &self,
        status: InterviewStatus,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError>;

    async fn by_mode(
        &self,
        mode: InterviewMode,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError>;
}
