use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::modules::interview::domain::entities::{Interview, InterviewMode};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ScheduleInterviewCommand {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i32,
    pub mode: InterviewMode,
    pub meeting_title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub candidate_id: i64,
    pub job_id: i64,
    pub user_email: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleInterviewError {
    #[error("Candidate not found with id: {0}")]
    CandidateNotFound(i64),

    #[error("Job application not found for job {job_id} and candidate {candidate_id}")]
    JobApplicationNotFound { job_id: i64, candidate_id: i64 },

    #[error("User not found with email: {0}")]
    UserNotFound(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Failed to generate meeting link. Please try again later.")]
    MeetingUnavailable,

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

#[async_trait]
pub trait ScheduleInterviewUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ScheduleInterviewCommand,
    ) -> Result<Interview, ScheduleInterviewError>;
}
