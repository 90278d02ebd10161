use actix_web::HttpResponse;
use serde::Deserialize;

use crate::modules::interview::application::ports::outgoing::interview_query::PageRequest;
use crate::shared::api::ApiResponse;

pub mod cancel_interview;
pub mod filter_interviews;
pub mod get_interviews;
pub mod get_interviews_by_candidate;
pub mod get_interviews_by_mode;
pub mod get_interviews_by_status;
pub mod get_single_interview;
pub mod record_interview_feedback;
pub mod reschedule_interview;
pub mod schedule_interview;
pub mod update_interview_status;

pub use cancel_interview::cancel_interview_handler;
pub use filter_interviews::filter_interviews_handler;
pub use get_interviews::get_interviews_handler;
pub use get_interviews_by_candidate::get_interviews_by_candidate_handler;
pub use get_interviews_by_mode::get_interviews_by_mode_handler;
pub use get_interviews_by_status::get_interviews_by_status_handler;
pub use get_single_interview::get_single_interview_handler;
pub use record_interview_feedback::record_interview_feedback_handler;
pub use reschedule_interview::reschedule_interview_handler;
pub use schedule_interview::schedule_interview_handler;
pub use update_interview_status::update_interview_status_handler;

pub const MAX_PAGE_SIZE: u64 = 100;

/// Shared `?page=&size=` query shape for the paginated listings.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> Result<PageRequest, HttpResponse> {
        let page = PageRequest {
            page: self.page.unwrap_or(0),
            size: self.size.unwrap_or(15),
        };
        if page.size == 0 || page.size > MAX_PAGE_SIZE {
            return Err(ApiResponse::bad_request(
                "VALIDATION_ERROR",
                &format!("size must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }
        Ok(page)
    }
}
