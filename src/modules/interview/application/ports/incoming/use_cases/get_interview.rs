use async_trait::async_trait;

use crate::modules::interview::domain::entities::Interview;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInterviewError {
    #[error("Interview not found with id: {0}")]
    InterviewNotFound(i64),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetInterviewUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Interview, GetInterviewError>;
}
