use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::interview::adapter::incoming::web::routes::PageQuery;
use crate::modules::interview::application::ports::incoming::use_cases::ListInterviewsError;
use crate::modules::interview::domain::entities::InterviewMode;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/interviews/mode/{mode}")]
pub async fn get_interviews_by_mode_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mode: InterviewMode = match path.into_inner().parse() {
        Ok(mode) => mode,
        Err(message) => return ApiResponse::bad_request("VALIDATION_ERROR", &message),
    };
    let page = match query.to_page_request() {
        Ok(page) => page,
        Err(response) => return response,
    };

    match data.interview.list.by_mode(mode, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(err @ ListInterviewsError::NoInterviewsFound) => {
            ApiResponse::not_found("NO_INTERVIEWS_FOUND", &err.to_string())
        }
        Err(err @ ListInterviewsError::CandidateNotFound(_)) => {
            ApiResponse::not_found("CANDIDATE_NOT_FOUND", &err.to_string())
        }
        Err(err @ ListInterviewsError::ValidatorUnavailable(_)) => {
            ApiResponse::service_unavailable("VALIDATOR_UNAVAILABLE", &err.to_string())
        }
        Err(ListInterviewsError::RepositoryError(e)) => {
            error!("Repository error listing interviews by mode: {}", e);
            ApiResponse::internal_error()
        }
    }
}
