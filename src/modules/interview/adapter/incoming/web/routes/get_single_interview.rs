use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::interview::application::ports::incoming::use_cases::GetInterviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/interviews/{id}")]
pub async fn get_single_interview_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.interview.get_single.execute(id).await {
        Ok(interview) => ApiResponse::success(interview),
        Err(err @ GetInterviewError::InterviewNotFound(_)) => {
            ApiResponse::not_found("INTERVIEW_NOT_FOUND", &err.to_string())
        }
        Err(GetInterviewError::RepositoryError(e)) => {
            error!("Repository error fetching interview {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
