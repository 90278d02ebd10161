//! Hand-rolled implementations of the outgoing ports for service tests.
//! Each mock keeps its state behind an `Arc` so tests can hold a clone and
//! assert on calls after handing the mock to a service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

use crate::modules::interview::application::ports::outgoing::event_publisher::{
    EventPublishError, InterviewCancelledEvent, InterviewCreatedEvent, InterviewEventPublisher,
    InterviewUpdatedEvent,
};
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    CacheRegion, InterviewCache, InterviewCacheError,
};
use crate::modules::interview::application::ports::outgoing::interview_query::{
    InterviewQuery, InterviewQueryError, PageRequest, PageResult,
};
use crate::modules::interview::application::ports::outgoing::interview_repository::{
    InterviewRepository, InterviewRepositoryError, NewInterview,
};
use crate::modules::interview::application::ports::outgoing::jobs_directory::{
    DirectoryError, JobsDirectory,
};
use crate::modules::interview::application::ports::outgoing::meeting_provisioner::{
    MeetingDetails, MeetingProvisionError, MeetingProvisioner,
};
use crate::modules::interview::application::ports::outgoing::user_directory::UserDirectory;
use crate::modules::interview::domain::entities::{
    Interview, InterviewFilter, InterviewMode, InterviewStatus,
};

// -----------------------------
// Jobs directory
// -----------------------------

#[derive(Clone)]
pub struct StubJobsDirectory {
    pub candidate_exists: bool,
    pub application_valid: bool,
    pub fail_checks: bool,
    pub fail_display_lookups: bool,
    pub(crate) calls: Arc<Mutex<Vec<String>>>,
}

impl Default for StubJobsDirectory {
    fn default() -> Self {
        Self {
            candidate_exists: true,
            application_valid: true,
            fail_checks: false,
            fail_display_lookups: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl StubJobsDirectory {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl JobsDirectory for StubJobsDirectory {
    async fn candidate_exists(&self, _candidate_id: i64) -> Result<bool, DirectoryError> {
        self.record("candidate_exists");
        if self.fail_checks {
            return Err(DirectoryError::Unavailable("jobs service down".to_string()));
        }
        Ok(self.candidate_exists)
    }

    async fn job_application_valid(
        &self,
        _job_id: i64,
        _candidate_id: i64,
    ) -> Result<bool, DirectoryError> {
        self.record("job_application_valid");
        if self.fail_checks {
            return Err(DirectoryError::Unavailable("jobs service down".to_string()));
        }
        Ok(self.application_valid)
    }

    async fn candidate_email_by_id(&self, _candidate_id: i64) -> Result<String, DirectoryError> {
        self.record("candidate_email_by_id");
        if self.fail_display_lookups {
            return Err(DirectoryError::Unavailable("jobs service down".to_string()));
        }
        Ok("candidate@example.com".to_string())
    }

    async fn job_title_by_id(&self, _job_id: i64) -> Result<String, DirectoryError> {
        self.record("job_title_by_id");
        if self.fail_display_lookups {
            return Err(DirectoryError::Unavailable("jobs service down".to_string()));
        }
        Ok("Backend Engineer".to_string())
    }
}

// -----------------------------
// User directory
// -----------------------------

#[derive(Clone)]
pub struct StubUserDirectory {
    pub user_exists: bool,
    pub fail: bool,
}

impl Default for StubUserDirectory {
    fn default() -> Self {
        Self {
            user_exists: true,
            fail: false,
        }
    }
}

#[async_trait]
impl UserDirectory for StubUserDirectory {
    async fn user_exists(&self, _email: &str) -> Result<bool, DirectoryError> {
        if self.fail {
            return Err(DirectoryError::Unavailable("auth service down".to_string()));
        }
        Ok(self.user_exists)
    }
}

// -----------------------------
// Meeting provisioner
// -----------------------------

#[derive(Clone, Default)]
pub struct RecordingProvisioner {
    pub fail: bool,
    calls: Arc<Mutex<Vec<(String, NaiveDateTime, NaiveDateTime)>>>,
}

impl RecordingProvisioner {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, NaiveDateTime, NaiveDateTime)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingProvisioner for RecordingProvisioner {
    async fn create_meeting(
        &self,
        title: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<MeetingDetails, MeetingProvisionError> {
        self.calls
            .lock()
            .unwrap()
            .push((title.to_string(), start_time, end_time));
        if self.fail {
            return Err(MeetingProvisionError::Unavailable(
                "calendar api error".to_string(),
            ));
        }
        Ok(MeetingDetails {
            meeting_link: "https://meet/xyz".to_string(),
            title: title.to_string(),
            start_time,
            end_time,
        })
    }
}

// -----------------------------
// Repository
// -----------------------------

#[derive(Clone, Default)]
pub struct RecordingRepository {
    pub fail: bool,
    records: Arc<Mutex<HashMap<i64, Interview>>>,
    inserted: Arc<Mutex<Vec<Interview>>>,
    updated: Arc<Mutex<Vec<Interview>>>,
    next_id: Arc<AtomicI64>,
}

impl RecordingRepository {
    pub fn with_existing(interviews: Vec<Interview>) -> Self {
        let repo = Self::default();
        {
            let mut records = repo.records.lock().unwrap();
            for interview in interviews {
                repo.next_id
                    .fetch_max(interview.id, Ordering::SeqCst);
                records.insert(interview.id, interview);
            }
        }
        repo
    }

    pub fn inserted(&self) -> Vec<Interview> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Interview> {
        self.updated.lock().unwrap().clone()
    }

    pub fn stored(&self, id: i64) -> Option<Interview> {
        self.records.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl InterviewRepository for RecordingRepository {
    async fn insert(&self, data: NewInterview) -> Result<Interview, InterviewRepositoryError> {
        if self.fail {
            return Err(InterviewRepositoryError::DatabaseError(
                "insert failed".to_string(),
            ));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let interview = Interview {
            id,
            scheduled_date: data.scheduled_date,
            scheduled_time: data.scheduled_time,
            duration_minutes: data.duration_minutes,
            mode: data.mode,
            status: data.status,
            meeting_title: data.meeting_title,
            meeting_link: data.meeting_link,
            location: data.location,
            description: data.description,
            feedback: None,
            candidate_id: data.candidate_id,
            job_id: data.job_id,
            user_email: data.user_email,
        };
        self.records
            .lock()
            .unwrap()
            .insert(id, interview.clone());
        self.inserted.lock().unwrap().push(interview.clone());
        Ok(interview)
    }

    async fn update(&self, interview: Interview) -> Result<Interview, InterviewRepositoryError> {
        if self.fail {
            return Err(InterviewRepositoryError::DatabaseError(
                "update failed".to_string(),
            ));
        }
        self.records
            .lock()
            .unwrap()
            .insert(interview.id, interview.clone());
        self.updated.lock().unwrap().push(interview.clone());
        Ok(interview)
    }

    async fn exists(&self, id: i64) -> Result<bool, InterviewRepositoryError> {
        if self.fail {
            return Err(InterviewRepositoryError::DatabaseError(
                "exists failed".to_string(),
            ));
        }
        Ok(self.records.lock().unwrap().contains_key(&id))
    }
}

// -----------------------------
// Cache
// -----------------------------

#[derive(Clone, Default)]
pub struct RecordingCache {
    pub fail: bool,
    store: Arc<Mutex<HashMap<(CacheRegion, String), JsonValue>>>,
    puts: Arc<Mutex<Vec<(CacheRegion, String)>>>,
    invalidations: Arc<Mutex<Vec<Vec<CacheRegion>>>>,
}

impl RecordingCache {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn seed<T: serde::Serialize>(&self, region: CacheRegion, key: &str, value: &T) {
        self.store.lock().unwrap().insert(
            (region, key.to_string()),
            serde_json::to_value(value).unwrap(),
        );
    }

    pub fn entry(&self, region: CacheRegion, key: &str) -> Option<JsonValue> {
        self.store
            .lock()
            .unwrap()
            .get(&(region, key.to_string()))
            .cloned()
    }

    pub fn puts(&self) -> Vec<(CacheRegion, String)> {
        self.puts.lock().unwrap().clone()
    }

    pub fn invalidations(&self) -> Vec<Vec<CacheRegion>> {
        self.invalidations.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterviewCache for RecordingCache {
    async fn get(
        &self,
        region: CacheRegion,
        key: &str,
    ) -> Result<Option<JsonValue>, InterviewCacheError> {
        if self.fail {
            return Err(InterviewCacheError::Backend("redis down".to_string()));
        }
        Ok(self
            .store
            .lock()
            .unwrap()
            .get(&(region, key.to_string()))
            .cloned())
    }

    async fn put(
        &self,
        region: CacheRegion,
        key: &str,
        value: &JsonValue,
    ) -> Result<(), InterviewCacheError> {
        if self.fail {
            return Err(InterviewCacheError::Backend("redis down".to_string()));
        }
        self.puts.lock().unwrap().push((region, key.to_string()));
        self.store
            .lock()
            .unwrap()
            .insert((region, key.to_string()), value.clone());
        Ok(())
    }

    async fn invalidate_regions(
        &self,
        regions: &[CacheRegion],
    ) -> Result<(), InterviewCacheError> {
        if self.fail {
            return Err(InterviewCacheError::Backend("redis down".to_string()));
        }
        self.invalidations.lock().unwrap().push(regions.to_vec());
        self.store
            .lock()
            .unwrap()
            .retain(|(region, _), _| !regions.contains(region));
        Ok(())
    }
}

// -----------------------------
// Event publisher
// -----------------------------

#[derive(Clone, Default)]
pub struct RecordingPublisher {
    pub fail: bool,
    pub(crate) created: Arc<Mutex<Vec<InterviewCreatedEvent>>>,
    pub(crate) updated: Arc<Mutex<Vec<InterviewUpdatedEvent>>>,
    pub(crate) cancelled: Arc<Mutex<Vec<InterviewCancelledEvent>>>,
}

impl RecordingPublisher {
    pub fn created(&self) -> Vec<InterviewCreatedEvent> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<InterviewUpdatedEvent> {
        self.updated.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<InterviewCancelledEvent> {
        self.cancelled.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterviewEventPublisher for RecordingPublisher {
    async fn publish_created(
        &self,
        event: InterviewCreatedEvent,
    ) -> Result<(), EventPublishError> {
        if self.fail {
            return Err(EventPublishError::PublishFailed("broker down".to_string()));
        }
        self.created.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_updated(
        &self,
        event: InterviewUpdatedEvent,
    ) -> Result<(), EventPublishError> {
        if self.fail {
            return Err(EventPublishError::PublishFailed("broker down".to_string()));
        }
        self.updated.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_cancelled(
        &self,
        event: InterviewCancelledEvent,
    ) -> Result<(), EventPublishError> {
        if self.fail {
            return Err(EventPublishError::PublishFailed("broker down".to_string()));
        }
        self.cancelled.lock().unwrap().push(event);
        Ok(())
    }
}

// -----------------------------
// Query
// -----------------------------

#[derive(Clone, Default)]
pub struct StubQuery {
    pub list_items: Vec<Interview>,
    pub total: u64,
    pub(crate) records: Arc<Mutex<HashMap<i64, Interview>>>,
    pub(crate) calls: Arc<Mutex<Vec<String>>>,
}

impl StubQuery {
    pub fn with_records(interviews: Vec<Interview>) -> Self {
        let stub = Self::default();
        {
            let mut records = stub.records.lock().unwrap();
            for interview in interviews {
                records.insert(interview.id, interview);
            }
        }
        stub
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl InterviewQuery for StubQuery {
    async fn find_by_id(&self, id: i64) -> Result<Option<Interview>, InterviewQueryError> {
        self.record("find_by_id");
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<Interview>, InterviewQueryError> {
        self.record("list");
        Ok(self.list_items.clone())
    }

    async fn count(&self) -> Result<u64, InterviewQueryError> {
        self.record("count");
        Ok(self.total)
    }

    async fn list_by_candidate(
        &self,
        _candidate_id: i64,
        _page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError> {
        self.record("list_by_candidate");
        Ok(self.list_items.clone())
    }

    async fn count_by_candidate(&self, _candidate_id: i64) -> Result<u64, InterviewQueryError> {
        self.record("count_by_candidate");
        Ok(self.total)
    }

    async fn list_by_status(
        &self,
        _status: InterviewStatus,
        _page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError> {
        self.record("list_by_status");
        Ok(self.list_items.clone())
    }

    async fn count_by_status(
        &self,
        _status: InterviewStatus,
    ) -> Result<u64, InterviewQueryError> {
        self.record("count_by_status");
        Ok(self.total)
    }

    async fn list_by_mode(
        &self,
        _mode: InterviewMode,
        _page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError> {
        self.record("list_by_mode");
        Ok(self.list_items.clone())
    }

    async fn count_by_mode(&self, _mode: InterviewMode) -> Result<u64, InterviewQueryError> {
        self.record("count_by_mode");
        Ok(self.total)
    }

    async fn list_filtered(
        &self,
        _filter: &InterviewFilter,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, InterviewQueryError> {
        self.record("list_filtered");
        Ok(PageResult {
            items: self.list_items.clone(),
            page: page.page,
            size: page.size,
            total: self.total,
        })
    }
}
