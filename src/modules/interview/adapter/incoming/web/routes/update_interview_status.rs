use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::interview::application::ports::incoming::use_cases::UpdateInterviewStatusError;
use crate::modules::interview::domain::entities::InterviewStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: InterviewStatus,
}

#[patch("/api/interviews/{id}/status")]
pub async fn update_interview_status_handler(
    path: web::Path<i64>,
    req: web::Json<UpdateStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.interview.update_status.execute(id, req.status).await {
        Ok(interview) => ApiResponse::success(interview),
        Err(err @ UpdateInterviewStatusError::InterviewNotFound(_)) => {
            ApiResponse::not_found("INTERVIEW_NOT_FOUND", &err.to_string())
        }
        Err(UpdateInterviewStatusError::RepositoryError(e)) => {
            error!("Repository error updating status of interview {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
