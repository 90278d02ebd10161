use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::modules::interview::application::ports::incoming::use_cases::CancelInterviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CancelQuery {
    pub cancellation_reason: Option<String>,
}

#[delete("/api/interviews/{id}")]
pub async fn cancel_interview_handler(
    path: web::Path<i64>,
    query: web::Query<CancelQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!("Cancelling interview {}", id);

    match data
        .interview
        .cancel
        .execute(id, query.into_inner().cancellation_reason)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err @ CancelInterviewError::InterviewNotFound(_)) => {
            ApiResponse::not_found("INTERVIEW_NOT_FOUND", &err.to_string())
        }
        Err(CancelInterviewError::RepositoryError(e)) => {
            error!("Repository error cancelling interview {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
