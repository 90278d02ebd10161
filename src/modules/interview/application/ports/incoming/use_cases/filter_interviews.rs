use async_trait::async_trait;

use crate::modules::interview::application::ports::outgoing::interview_query::{
    PageRequest, PageResult,
};
use crate::modules::interview::domain::entities::{Interview, InterviewFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterInterviewsError {
    #[error("No interviews found")]
    NoInterviewsFound,

    #[error("{0}")]
    InvalidFilter(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FilterInterviewsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: InterviewFilter,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, FilterInterviewsError>;
}
