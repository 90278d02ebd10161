pub mod cancel_interview_service;
pub mod interview_notifier;
pub mod interview_reader;
pub mod record_interview_feedback_service;
pub mod reschedule_interview_service;
pub mod schedule_interview_service;
pub mod update_interview_status_service;

pub use cancel_interview_service::CancelInterviewService;
pub use interview_notifier::InterviewNotifier;
pub use interview_reader::InterviewReader;
pub use record_interview_feedback_service::RecordInterviewFeedbackService;
pub use reschedule_interview_service::RescheduleInterviewService;
pub use schedule_interview_service::ScheduleInterviewService;
pub use update_interview_status_service::UpdateInterviewStatusService;
