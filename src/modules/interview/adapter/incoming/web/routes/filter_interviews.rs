use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::interview::adapter::incoming::web::routes::PageQuery;
use crate::modules::interview::application::ports::incoming::use_cases::FilterInterviewsError;
use crate::modules::interview::domain::entities::InterviewFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Ad-hoc filter query. The filter rides in the body so arbitrary
/// combinations stay expressible; pagination stays in the query string like
/// the other listings.
#[post("/api/interviews/filter")]
pub async fn filter_interviews_handler(
    filter: web::Json<InterviewFilter>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match query.to_page_request() {
        Ok(page) => page,
        Err(response) => return response,
    };

    match data
        .interview
        .filter
        .execute(filter.into_inner(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(err @ FilterInterviewsError::NoInterviewsFound) => {
            ApiResponse::not_found("NO_INTERVIEWS_FOUND", &err.to_string())
        }
        Err(FilterInterviewsError::InvalidFilter(message)) => {
            ApiResponse::bad_request("INVALID_FILTER", &message)
        }
        Err(FilterInterviewsError::RepositoryError(e)) => {
            error!("Repository error filtering interviews: {}", e);
            ApiResponse::internal_error()
        }
    }
}
