use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelInterviewError {
    #[error("Interview not found with id: {0}")]
    InterviewNotFound(i64),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Cancellation is terminal and idempotent: cancelling an already-cancelled
/// interview succeeds and leaves it cancelled.
#[async_trait]
pub trait CancelInterviewUseCase: Send + Sync {
    async fn execute(&self, id: i64, reason: Option<String>) -> Result<(), CancelInterviewError>;
}
