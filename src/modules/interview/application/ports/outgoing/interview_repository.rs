use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::modules::interview::domain::entities::{Interview, InterviewMode, InterviewStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Data for a not-yet-persisted interview. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewInterview {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i32,
    pub mode: InterviewMode,
    pub status: InterviewStatus,
    pub meeting_title: Option<String>,
    pub meeting_link: Option<String>,
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
pub enum InterviewRepositoryError {
    #[error("Interview not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, interviews table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait InterviewRepository: Send + Sync {
    async fn insert(&self, data: NewInterview) -> Result<Interview, InterviewRepositoryError>;

    /// Full-row replacement keyed by `interview.id`.
    async fn update(&self, interview: Interview) -> Result<Interview, InterviewRepositoryError>;

    async fn exists(&self, id: i64) -> Result<bool, InterviewRepositoryError>;
}
