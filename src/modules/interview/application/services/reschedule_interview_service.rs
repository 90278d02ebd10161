use async_trait::async_trait;
use chrono::Duration;
use tracing::{error, info, warn};

use crate::modules::interview::application::ports::incoming::use_cases::{
    RescheduleInterviewCommand, RescheduleInterviewError, RescheduleInterviewUseCase,
};
use crate::modules::interview::application::ports::outgoing::event_publisher::InterviewEventPublisher;
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    by_id_key, CacheRegion, InterviewCache, MutationKind,
};
use crate::modules::interview::application::ports::outgoing::interview_query::InterviewQuery;
use crate::modules::interview::application::ports::outgoing::interview_repository::InterviewRepository;
use crate::modules::interview::application::ports::outgoing::jobs_directory::JobsDirectory;
use crate::modules::interview::application::ports::outgoing::meeting_provisioner::MeetingProvisioner;
use crate::modules::interview::application::services::interview_notifier::InterviewNotifier;
use crate::modules::interview::domain::entities::{Interview, InterviewMode};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//
// Change flags are computed against the loaded record *before* anything is
// mutated; the updated event carries the genuinely previous date/time.
// Whenever the post-update mode is ONLINE the meeting link is provisioned
// again, even if neither mode nor time changed.
//

pub struct RescheduleInterviewService<Q, R, M, C, J, P>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    M: MeetingProvisioner,
    C: InterviewCache,
    J: JobsDirectory,
    P: InterviewEventPublisher,
{
    query: Q,
    repository: R,
    provisioner: M,
    cache: C,
    notifier: InterviewNotifier<J, P>,
}

impl<Q, R, M, C, J, P> RescheduleInterviewService<Q, R, M, C, J, P>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    M: MeetingProvisioner,
    C: InterviewCache,
    J: JobsDirectory,
    P: InterviewEventPublisher,
{
    pub fn new(
        query: Q,
        repository: R,
        provisioner: M,
        cache: C,
        notifier: InterviewNotifier<J, P>,
    ) -> Self {
        Self {
            query,
            repository,
            provisioner,
            cache,
            notifier,
        }
    }

    async fn load(&self, id: i64) -> Result<Interview, RescheduleInterviewError> {
        match self.cache.get(CacheRegion::ById, &by_id_key(id)).await {
            Ok(Some(json)) => {
                if let Ok(interview) = serde_json::from_value::<Interview>(json) {
                    return Ok(interview);
                }
                warn!("Discarding undecodable cache entry for interview {}", id);
            }
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for interview {}: {}", id, e),
        }

        self.query
            .find_by_id(id)
            .await
            .map_err(|e| RescheduleInterviewError::RepositoryError(e.to_string()))?
            .ok_or(RescheduleInterviewError::InterviewNotFound(id))
    }

    async fn refresh_cache(&self, interview: &Interview) {
        match serde_json::to_value(interview) {
            Ok(json) => {
                if let Err(e) = self
                    .cache
                    .put(CacheRegion::ById, &by_id_key(interview.id), &json)
                    .await
                {
                    warn!(
                        "Cache write-through failed for interview {}: {}",
                        interview.id, e
                    );
                }
            }
            Err(e) => warn!("Could not serialize interview {} for cache: {}", interview.id, e),
        }
        if let Err(e) = self
            .cache
            .invalidate_regions(MutationKind::Reschedule.invalidated_regions())
            .await
        {
            warn!(
                "Cache invalidation failed after updating interview {}: {}",
                interview.id, e
            );
        }
    }
}

#[async_trait]
impl<Q, R, M, C, J, P> RescheduleInterviewUseCase
    for RescheduleInterviewService<Q, R, M, C, J, P>
where
    Q: InterviewQuery + Send + Sync,
    R: InterviewRepository + Send + Sync,
    M: MeetingProvisioner + Send + Sync,
    C: InterviewCache + Send + Sync,
    J: JobsDirectory + Send + Sync,
    P: InterviewEventPublisher + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        command: RescheduleInterviewCommand,
    ) -> Result<Interview, RescheduleInterviewError> {
        let current = self.load(id).await?;

        let time_changed = current.scheduled_date != command.scheduled_date
            || current.scheduled_time != command.scheduled_time;
        let mode_changed = current.mode != command.mode;
        let location_changed = current.location != command.location;

        if command.mode == InterviewMode::InPerson && is_blank(&command.location) {
            return Err(RescheduleInterviewError::InvalidRequest(
                "Location is required for in-person interviews".to_string(),
            ));
        }

        let mut updated = current.clone();
        updated.scheduled_date = command.scheduled_date;
        updated.scheduled_time = command.scheduled_time;
        updated.duration_minutes = command.duration_minutes;
        updated.mode = command.mode;
        updated.description = command.description.clone();

        match command.mode {
            InterviewMode::Online => {
                let start = command.scheduled_date.and_time(command.scheduled_time);
                let end = start + Duration::minutes(command.duration_minutes as i64);
                let title = updated.meeting_title.clone().unwrap_or_default();
                let details = self
                    .provisioner
                    .create_meeting(&title, start, end)
                    .await
                    .map_err(|e| {
                        error!("Failed to provision meeting for interview {}: {}", id, e);
                        RescheduleInterviewError::MeetingUnavailable
                    })?;
                updated.meeting_link = Some(details.meeting_link);
                updated.location = None;
            }
            InterviewMode::InPerson => {
                updated.location = command.location.clone();
                updated.meeting_link = None;
            }
        }

        let saved = self
            .repository
            .update(updated)
            .await
            .map_err(|e| RescheduleInterviewError::RepositoryError(e.to_string()))?;

        info!("Updated interview {}", saved.id);

        self.refresh_cache(&saved).await;
        self.notifier
            .notify_updated(
                &saved,
                current.scheduled_date,
                current.scheduled_time,
                time_changed,
                mode_changed,
                location_changed,
            )
            .await;

        Ok(saved)
    }
}
