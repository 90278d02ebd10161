use async_trait::async_trait;

use crate::modules::interview::domain::entities::{Interview, InterviewStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateInterviewStatusError {
    #[error("Interview not found with id: {0}")]
    InterviewNotFound(i64),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Status is settable to any value; cancellation being one-way is a
/// convention of the cancel use case, not enforced here.
#[async_trait]
pub trait UpdateInterviewStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i64,
        status: InterviewStatus,
    ) -> Result<Interview, UpdateInterviewStatusError>;
}
