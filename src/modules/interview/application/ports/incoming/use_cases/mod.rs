mod cancel_interview;
mod filter_interviews;
mod get_interview;
mod list_interviews;
mod record_interview_feedback;
mod reschedule_interview;
mod schedule_interview;
mod update_interview_status;

pub use cancel_interview::{CancelInterviewError, CancelInterviewUseCase};
pub use filter_interviews::{FilterInterviewsError, FilterInterviewsUseCase};
pub use get_interview::{GetInterviewError, GetInterviewUseCase};
pub use list_interviews::{ListInterviewsError, ListInterviewsUseCase};
pub use record_interview_feedback::{
    RecordInterviewFeedbackError, RecordInterviewFeedbackUseCase,
};
pub use reschedule_interview::{
    RescheduleInterviewCommand, RescheduleInterviewError, RescheduleInterviewUseCase,
};
pub use schedule_interview::{
    ScheduleInterviewCommand, ScheduleInterviewError, ScheduleInterviewUseCase,
};
pub use update_interview_status::{UpdateInterviewStatusError, UpdateInterviewStatusUseCase};
