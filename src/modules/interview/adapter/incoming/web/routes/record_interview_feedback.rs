use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::interview::application::ports::incoming::use_cases::RecordInterviewFeedbackError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordFeedbackRequest {
    pub feedback: String,
}

#[patch("/api/interviews/{id}/feedback")]
pub async fn record_interview_feedback_handler(
    path: web::Path<i64>,
    req: web::Json<RecordFeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .interview
        .record_feedback
        .execute(id, req.into_inner().feedback)
        .await
    {
        Ok(interview) => ApiResponse::success(interview),
        Err(err @ RecordInterviewFeedbackError::InterviewNotFound(_)) => {
            ApiResponse::not_found("INTERVIEW_NOT_FOUND", &err.to_string())
        }
        Err(RecordInterviewFeedbackError::RepositoryError(e)) => {
            error!(
                "Repository error recording feedback for interview {}: {}",
                id, e
            );
            ApiResponse::internal_error()
        }
    }
}
