use actix_web::{post, web, Responder};
use chrono::{NaiveDate, NaiveTime};
use email_address::EmailAddress;
use serde::Deserialize;
use tracing::error;

use crate::modules::interview::application::ports::incoming::use_cases::{
    ScheduleInterviewCommand, ScheduleInterviewError,
};
use crate::modules::interview::domain::entities::{
    InterviewMode, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ScheduleInterviewRequest {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: Option<i32>,
    pub mode: InterviewMode,
    pub meeting_title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub candidate_id: i64,
    pub job_id: i64,
    pub user_email: String,
}

impl ScheduleInterviewRequest {
    fn validate(&self) -> Result<(), String> {
        let duration = self.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration) {
            return Err(format!(
                "duration_minutes must be between {} and {}",
                MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
            ));
        }
        if !EmailAddress::is_valid(&self.user_email) {
            return Err("user_email is not a valid email address".to_string());
        }
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/interviews")]
pub async fn schedule_interview_handler(
    req: web::Json<ScheduleInterviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(message) = req.validate() {
        return ApiResponse::bad_request("VALIDATION_ERROR", &message);
    }

    let command = ScheduleInterviewCommand {
        scheduled_date: req.scheduled_date,
        scheduled_time: req.scheduled_time,
        duration_minutes: req.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
        mode: req.mode,
        meeting_title: req.meeting_title,
        location: req.location,
        description: req.description,
        candidate_id: req.candidate_id,
        job_id: req.job_id,
        user_email: req.user_email,
    };

    match data.interview.schedule.execute(command).await {
        Ok(interview) => ApiResponse::created(interview),

        Err(err @ ScheduleInterviewError::CandidateNotFound(_)) => {
            ApiResponse::not_found("CANDIDATE_NOT_FOUND", &err.to_string())
        }
        Err(err @ ScheduleInterviewError::JobApplicationNotFound { .. }) => {
            ApiResponse::not_found("JOB_APPLICATION_NOT_FOUND", &err.to_string())
        }
        Err(err @ ScheduleInterviewError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        Err(ScheduleInterviewError::InvalidRequest(message)) => {
            ApiResponse::bad_request("INVALID_REQUEST", &message)
        }
        Err(ScheduleInterviewError::InvalidArgument(message)) => {
            ApiResponse::bad_request("INVALID_ARGUMENT", &message)
        }
        Err(err @ ScheduleInterviewError::MeetingUnavailable) => {
            ApiResponse::service_unavailable("MEETING_UNAVAILABLE", &err.to_string())
        }
        Err(err @ ScheduleInterviewError::ValidatorUnavailable(_)) => {
            ApiResponse::service_unavailable("VALIDATOR_UNAVAILABLE", &err.to_string())
        }
        Err(ScheduleInterviewError::RepositoryError(e)) => {
            error!("Repository error scheduling interview: {}", e);
            ApiResponse::internal_error()
        }
    }
}
