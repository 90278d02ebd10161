//! Fixed-result and panicking use-case stubs for route tests, plus a
//! builder for assembling an `AppState` around them.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use crate::modules::interview::application::ports::incoming::use_cases::{
    CancelInterviewError, CancelInterviewUseCase, FilterInterviewsError, FilterInterviewsUseCase,
    GetInterviewError, GetInterviewUseCase, ListInterviewsError, ListInterviewsUseCase,
    RecordInterviewFeedbackError, RecordInterviewFeedbackUseCase, RescheduleInterviewCommand,
    RescheduleInterviewError, RescheduleInterviewUseCase, ScheduleInterviewCommand,
    ScheduleInterviewError, ScheduleInterviewUseCase, UpdateInterviewStatusError,
    UpdateInterviewStatusUseCase,
};
use crate::modules::interview::application::ports::outgoing::interview_query::{
    PageRequest, PageResult,
};
use crate::modules::interview::application::InterviewUseCases;
use crate::modules::interview::domain::entities::{
    Interview, InterviewFilter, InterviewMode, InterviewStatus,
};
use crate::AppState;

// -----------------------------
// Fixed-result stubs
// -----------------------------

pub struct FixedScheduleUseCase(pub Result<Interview, ScheduleInterviewError>);

#[async_trait]
impl ScheduleInterviewUseCase for FixedScheduleUseCase {
    async fn execute(
        &self,
        _command: ScheduleInterviewCommand,
    ) -> Result<Interview, ScheduleInterviewError> {
        self.0.clone()
    }
}

pub struct FixedRescheduleUseCase(pub Result<Interview, RescheduleInterviewError>);

#[async_trait]
impl RescheduleInterviewUseCase for FixedRescheduleUseCase {
    async fn execute(
        &self,
        _id: i64,
        _command: RescheduleInterviewCommand,
    ) -> Result<Interview, RescheduleInterviewError> {
        self.0.clone()
    }
}

pub struct FixedCancelUseCase(pub Result<(), CancelInterviewError>);

#[async_trait]
impl CancelInterviewUseCase for FixedCancelUseCase {
    async fn execute(&self, _id: i64, _reason: Option<String>) -> Result<(), CancelInterviewError> {
        self.0.clone()
    }
}

pub struct FixedStatusUseCase(pub Result<Interview, UpdateInterviewStatusError>);

#[async_trait]
impl UpdateInterviewStatusUseCase for FixedStatusUseCase {
    async fn execute(
        &self,
        _id: i64,
        _status: InterviewStatus,
    ) -> Result<Interview, UpdateInterviewStatusError> {
        self.0.clone()
    }
}

pub struct FixedFeedbackUseCase(pub Result<Interview, RecordInterviewFeedbackError>);

#[async_trait]
impl RecordInterviewFeedbackUseCase for FixedFeedbackUseCase {
    async fn execute(
        &self,
        _id: i64,
        _feedback: String,
    ) -> Result<Interview, RecordInterviewFeedbackError> {
        self.0.clone()
    }
}

pub struct FixedGetUseCase(pub Result<Interview, GetInterviewError>);

#[async_trait]
impl GetInterviewUseCase for FixedGetUseCase {
    async fn execute(&self, _id: i64) -> Result<Interview, GetInterviewError> {
        self.0.clone()
    }
}

/// Answers the same page for every listing variant.
pub struct FixedListUseCase(pub Result<PageResult<Interview>, ListInterviewsError>);

#[async_trait]
impl ListInterviewsUseCase for FixedListUseCase {
    async fn all(&self, _page: PageRequest) -> Result<PageResult<Interview>, ListInterviewsError> {
        self.0.clone()
    }

    async fn by_candidate(
        &self,
        _candidate_id: i64,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        self.0.clone()
    }

    async fn by_status(
        &self,
        _status: InterviewStatus,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        self.0.clone()
    }

    async fn by_mode(
        &self,
        _mode: InterviewMode,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        self.0.clone()
    }
}

pub struct FixedFilterUseCase(pub Result<PageResult<Interview>, FilterInterviewsError>);

#[async_trait]
impl FilterInterviewsUseCase for FixedFilterUseCase {
    async fn execute(
        &self,
        _filter: InterviewFilter,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, FilterInterviewsError> {
        self.0.clone()
    }
}

// -----------------------------
// Panicking defaults
// -----------------------------

pub struct StubScheduleUseCase;

#[async_trait]
impl ScheduleInterviewUseCase for StubScheduleUseCase {
    async fn execute(
        &self,
        _command: ScheduleInterviewCommand,
    ) -> Result<Interview, ScheduleInterviewError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRescheduleUseCase;

#[async_trait]
impl RescheduleInterviewUseCase for StubRescheduleUseCase {
    async fn execute(
        &self,
        _id: i64,
        _command: RescheduleInterviewCommand,
    ) -> Result<Interview, RescheduleInterviewError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCancelUseCase;

#[async_trait]
impl CancelInterviewUseCase for StubCancelUseCase {
    async fn execute(&self, _id: i64, _reason: Option<String>) -> Result<(), CancelInterviewError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubStatusUseCase;

#[async_trait]
impl UpdateInterviewStatusUseCase for StubStatusUseCase {
    async fn execute(
        &self,
        _id: i64,
        _status: InterviewStatus,
    ) -> Result<Interview, UpdateInterviewStatusError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFeedbackUseCase;

#[async_trait]
impl RecordInterviewFeedbackUseCase for StubFeedbackUseCase {
    async fn execute(
        &self,
        _id: i64,
        _feedback: String,
    ) -> Result<Interview, RecordInterviewFeedbackError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetUseCase;

#[async_trait]
impl GetInterviewUseCase for StubGetUseCase {
    async fn execute(&self, _id: i64) -> Result<Interview, GetInterviewError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListUseCase;

#[async_trait]
impl ListInterviewsUseCase for StubListUseCase {
    async fn all(&self, _page: PageRequest) -> Result<PageResult<Interview>, ListInterviewsError> {
        unimplemented!("Not used in this test")
    }

    async fn by_candidate(
        &self,
        _candidate_id: i64,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        unimplemented!("Not used in this test")
    }

    async fn by_status(
        &self,
        _status: InterviewStatus,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        unimplemented!("Not used in this test")
    }

    async fn by_mode(
        &self,
        _mode: InterviewMode,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFilterUseCase;

#[async_trait]
impl FilterInterviewsUseCase for StubFilterUseCase {
    async fn execute(
        &self,
        _filter: InterviewFilter,
        _page: PageRequest,
    ) -> Result<PageResult<Interview>, FilterInterviewsError> {
        unimplemented!("Not used in this test")
    }
}

// -----------------------------
// AppState builder
// -----------------------------

pub struct TestAppStateBuilder {
    schedule: Arc<dyn ScheduleInterviewUseCase + Send + Sync>,
    reschedule: Arc<dyn RescheduleInterviewUseCase + Send + Sync>,
    cancel: Arc<dyn CancelInterviewUseCase + Send + Sync>,
    update_status: Arc<dyn UpdateInterviewStatusUseCase + Send + Sync>,
    record_feedback: Arc<dyn RecordInterviewFeedbackUseCase + Send + Sync>,
    get_single: Arc<dyn GetInterviewUseCase + Send + Sync>,
    list: Arc<dyn ListInterviewsUseCase + Send + Sync>,
    filter: Arc<dyn FilterInterviewsUseCase + Send + Sync>,
}

impl TestAppStateBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            schedule: Arc::new(StubScheduleUseCase),
            reschedule: Arc::new(StubRescheduleUseCase),
            cancel: Arc::new(StubCancelUseCase),
            update_status: Arc::new(StubStatusUseCase),
            record_feedback: Arc::new(StubFeedbackUseCase),
            get_single: Arc::new(StubGetUseCase),
            list: Arc::new(StubListUseCase),
            filter: Arc::new(StubFilterUseCase),
        }
    }

    pub fn with_schedule(mut self, uc: Arc<dyn ScheduleInterviewUseCase + Send + Sync>) -> Self {
        self.schedule = uc;
        self
    }

    pub fn with_reschedule(
        mut self,
        uc: Arc<dyn RescheduleInterviewUseCase + Send + Sync>,
    ) -> Self {
        self.reschedule = uc;
        self
    }

    pub fn with_cancel(mut self, uc: Arc<dyn CancelInterviewUseCase + Send + Sync>) -> Self {
        self.cancel = uc;
        self
    }

    pub fn with_update_status(
        mut self,
        uc: Arc<dyn UpdateInterviewStatusUseCase + Send + Sync>,
    ) -> Self {
        self.update_status = uc;
        self
    }

    pub fn with_record_feedback(
        mut self,
        uc: Arc<dyn RecordInterviewFeedbackUseCase + Send + Sync>,
    ) -> Self {
        self.record_feedback = uc;
        self
    }

    pub fn with_get_single(mut self, uc: Arc<dyn GetInterviewUseCase + Send + Sync>) -> Self {
        self.get_single = uc;
        self
    }

    pub fn with_list(mut self, uc: Arc<dyn ListInterviewsUseCase + Send + Sync>) -> Self {
        self.list = uc;
        self
    }

    pub fn with_filter(mut self, uc: Arc<dyn FilterInterviewsUseCase + Send + Sync>) -> Self {
        self.filter = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            interview: InterviewUseCases {
                schedule: self.schedule,
                reschedule: self.reschedule,
                cancel: self.cancel,
                update_status: self.update_status,
                record_feedback: self.record_feedback,
                get_single: self.get_single,
                list: self.list,
                filter: self.filter,
            },
        })
    }
}
