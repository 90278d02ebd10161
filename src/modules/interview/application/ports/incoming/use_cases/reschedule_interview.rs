use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::modules::interview::domain::entities::{Interview, InterviewMode};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Full replacement of the mutable scheduling fields. Status, feedback and
/// the cross-service references are untouched by this use case.
#[derive(Debug, Clone)]
pub struct RescheduleInterviewCommand {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i32,
    pub mode: InterviewMode,
    pub location: Option<String>,
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RescheduleInterviewError {
    #[error("Interview not found with id: {0}")]
    InterviewNotFound(i64),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Failed to generate meeting link. Please try again later.")]
    MeetingUnavailable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RescheduleInterviewUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i64,
        command: RescheduleInterviewCommand,
    ) -> Result<Interview, RescheduleInterviewError>;
}
