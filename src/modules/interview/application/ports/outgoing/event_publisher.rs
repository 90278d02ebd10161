use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::modules::interview::domain::entities::InterviewMode;

pub const INTERVIEW_CREATED_TOPIC: &str = "interview-created";
pub const INTERVIEW_UPDATED_TOPIC: &str = "interview-updated";
pub const INTERVIEW_CANCELLED_TOPIC: &str = "interview-cancelled";

//
// ──────────────────────────────────────────────────────────
// Event payloads
// ──────────────────────────────────────────────────────────
//
// Payloads carry denormalized display fields (candidate email, job title)
// resolved from the remote services at publish time, so the notification
// subsystem never has to call back.
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCreatedEvent {
    pub interviewer_email: String,
    pub job_title: String,
    pub meeting_title: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub mode: InterviewMode,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub description: Option<String>,
    pub candidate_email: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewUpdatedEvent {
    pub interviewer_email: String,
    pub candidate_email: String,
    pub job_title: String,
    pub previous_date: NaiveDate,
    pub previous_time: NaiveTime,
    pub new_date: NaiveDate,
    pub new_time: NaiveTime,
    pub mode: InterviewMode,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub description: Option<String>,
    pub time_changed: bool,
    pub mode_changed: bool,
    pub location_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCancelledEvent {
    pub interviewer_email: String,
    pub candidate_email: String,
    pub job_title: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub cancellation_reason: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventPublishError {
    #[error("Publish failed: {0}")]
    PublishFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Transport for the three interview topics. Callers treat every publish as
/// best effort; errors stop at the notifier.
#[async_trait]
pub trait InterviewEventPublisher: Send + Sync {
    async fn publish_created(&self, event: InterviewCreatedEvent)
        -> Result<(), EventPublishError>;

    async fn publish_updated(&self, event: InterviewUpdatedEvent)
        -> Result<(), EventPublishError>;

    async fn publish_cancelled(
        &self,
        event: InterviewCancelledEvent,
    ) -> Result<(), EventPublishError>;
}
