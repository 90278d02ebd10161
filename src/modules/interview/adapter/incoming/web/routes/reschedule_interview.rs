use actix_web::{put, web, Responder};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::error;

use crate::modules::interview::application::ports::incoming::use_cases::{
    RescheduleInterviewCommand, RescheduleInterviewError,
};
use crate::modules::interview::domain::entities::{
    InterviewMode, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct RescheduleInterviewRequest {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i32,
    pub mode: InterviewMode,
    pub location: Option<String>,
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/interviews/{id}")]
pub async fn reschedule_interview_handler(
    path: web::Path<i64>,
    req: web::Json<RescheduleInterviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&req.duration_minutes) {
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!(
                "duration_minutes must be between {} and {}",
                MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
            ),
        );
    }

    let command = RescheduleInterviewCommand {
        scheduled_date: req.scheduled_date,
        scheduled_time: req.scheduled_time,
        duration_minutes: req.duration_minutes,
        mode: req.mode,
        location: req.location,
        description: req.description,
    };

    match data.interview.reschedule.execute(id, command).await {
        Ok(interview) => ApiResponse::success(interview),
        Err(err @ RescheduleInterviewError::InterviewNotFound(_)) => {
            ApiResponse::not_found("INTERVIEW_NOT_FOUND", &err.to_string())
        }
        Err(RescheduleInterviewError::InvalidRequest(message)) => {
            ApiResponse::bad_request("INVALID_REQUEST", &message)
        }
        Err(err @ RescheduleInterviewError::MeetingUnavailable) => {
            ApiResponse::service_unavailable("MEETING_UNAVAILABLE", &err.to_string())
        }
        Err(RescheduleInterviewError::RepositoryError(e)) => {
            error!("Repository error updating interview {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
