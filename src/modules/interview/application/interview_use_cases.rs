use std::sync::Arc;

use crate::modules::interview::application::ports::incoming::use_cases::{
    CancelInterviewUseCase, FilterInterviewsUseCase, GetInterviewUseCase, ListInterviewsUseCase,
    RecordInterviewFeedbackUseCase, RescheduleInterviewUseCase, ScheduleInterviewUseCase,
    UpdateInterviewStatusUseCase,
};

#[derive(Clone)]
pub struct InterviewUseCases {
    pub schedule: Arc<dyn ScheduleInterviewUseCase + Send + Sync>,
    pub reschedule: Arc<dyn RescheduleInterviewUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelInterviewUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateInterviewStatusUseCase + Send + Sync>,
    pub record_feedback: Arc<dyn RecordInterviewFeedbackUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetInterviewUseCase + Send + Sync>,
    pub list: Arc<dyn ListInterviewsUseCase + Send + Sync>,
    pub filter: Arc<dyn FilterInterviewsUseCase + Send + Sync>,
}
