use async_trait::async_trait;
use chrono::NaiveDateTime;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDetails {
    pub meeting_link: String,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Every transport or remote-side failure collapses into this one class;
/// the caller aborts the whole mutation on it. No retries here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MeetingProvisionError {
    #[error("Meeting provisioning unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MeetingProvisioner: Send + Sync {
    async fn create_meeting(
        &self,
        title: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<MeetingDetails, MeetingProvisionError>;
}
