use async_trait::async_trait;
use chrono::{Duration, Local};
use tracing::{error, info, warn};

use crate::modules::interview::application::ports::incoming::use_cases::{
    ScheduleInterviewCommand, ScheduleInterviewError, ScheduleInterviewUseCase,
};
use crate::modules::interview::application::ports::outgoing::event_publisher::InterviewEventPublisher;
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    by_id_key, CacheRegion, InterviewCache, MutationKind,
};
use crate::modules::interview::application::ports::outgoing::interview_repository::{
    InterviewRepository, InterviewRepositoryError, NewInterview,
};
use crate::modules::interview::application::ports::outgoing::jobs_directory::JobsDirectory;
use crate::modules::interview::application::ports::outgoing::meeting_provisioner::MeetingProvisioner;
use crate::modules::interview::application::ports::outgoing::user_directory::UserDirectory;
use crate::modules::interview::application::services::interview_notifier::InterviewNotifier;
use crate::modules::interview::domain::entities::{Interview, InterviewMode, InterviewStatus};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//
// Creation runs in a fixed order; a failure at any step stops everything
// after it, so nothing is persisted and no cache region is touched unless
// the row made it to the store:
//
//   existence checks → mode rule → date rule → build →
//   provision (ONLINE only) → persist → cache → publish
//

pub struct ScheduleInterviewService<J, U, M, R, C, P>
where
    J: JobsDirectory,
    U: UserDirectory,
    M: MeetingProvisioner,
    R: InterviewRepository,
    C: InterviewCache,
    P: InterviewEventPublisher,
{
    jobs: J,
    users: U,
    provisioner: M,
    repository: R,
    cache: C,
    notifier: InterviewNotifier<J, P>,
}

impl<J, U, M, R, C, P> ScheduleInterviewService<J, U, M, R, C, P>
where
    J: JobsDirectory,
    U: UserDirectory,
    M: MeetingProvisioner,
    R: InterviewRepository,
    C: InterviewCache,
    P: InterviewEventPublisher,
{
    pub fn new(
        jobs: J,
        users: U,
        provisioner: M,
        repository: R,
        cache: C,
        notifier: InterviewNotifier<J, P>,
    ) -> Self {
        Self {
            jobs,
            users,
            provisioner,
            repository,
            cache,
            notifier,
        }
    }

    /// Candidate, then job-application pairing, then interviewer. The order
    /// is part of the contract: callers rely on which failure they see first.
    async fn validate_existence(
        &self,
        command: &ScheduleInterviewCommand,
    ) -> Result<(), ScheduleInterviewError> {
        let candidate_found = self
            .jobs
            .candidate_exists(command.candidate_id)
            .await
            .map_err(|e| ScheduleInterviewError::ValidatorUnavailable(e.to_string()))?;
        if !candidate_found {
            return Err(ScheduleInterviewError::CandidateNotFound(
                command.candidate_id,
            ));
        }

        let application_valid = self
            .jobs
            .job_application_valid(command.job_id, command.candidate_id)
            .await
            .map_err(|e| ScheduleInterviewError::ValidatorUnavailable(e.to_string()))?;
        if !application_valid {
            return Err(ScheduleInterviewError::JobApplicationNotFound {
                job_id: command.job_id,
                candidate_id: command.candidate_id,
            });
        }

        let user_found = self
            .users
            .user_exists(&command.user_email)
            .await
            .map_err(|e| ScheduleInterviewError::ValidatorUnavailable(e.to_string()))?;
        if !user_found {
            return Err(ScheduleInterviewError::UserNotFound(
                command.user_email.clone(),
            ));
        }

        Ok(())
    }

    fn validate_mode_fields(
        command: &ScheduleInterviewCommand,
    ) -> Result<(), ScheduleInterviewError> {
        match command.mode {
            InterviewMode::Online if is_blank(&command.meeting_title) => {
                Err(ScheduleInterviewError::InvalidRequest(
                    "Meeting title is required for online interviews".to_string(),
                ))
            }
            InterviewMode::InPerson if is_blank(&command.location) => {
                Err(ScheduleInterviewError::InvalidRequest(
                    "Location is required for in-person interviews".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    fn validate_schedule_date(
        command: &ScheduleInterviewCommand,
    ) -> Result<(), ScheduleInterviewError> {
        if command.scheduled_date < Local::now().date_naive() {
            return Err(ScheduleInterviewError::InvalidArgument(
                "Interview date must not be in the past".to_string(),
            ));
        }
        Ok(())
    }

    // Runs after the row is durable; a cache hiccup here must not undo a
    // committed create, so failures are logged and swallowed.
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
            .invalidate_regions(MutationKind::Create.invalidated_regions())
            .await
        {
            warn!(
                "Cache invalidation failed after creating interview {}: {}",
                interview.id, e
            );
        }
    }
}

#[async_trait]
impl<J, U, M, R, C, P> ScheduleInterviewUseCase for ScheduleInterviewService<J, U, M, R, C, P>
where
    J: JobsDirectory + Send + Sync,
    U: UserDirectory + Send + Sync,
    M: MeetingProvisioner + Send + Sync,
    R: InterviewRepository + Send + Sync,
    C: InterviewCache + Send + Sync,
    P: InterviewEventPublisher + Send + Sync,
{
    async fn execute(
        &self,
        command: ScheduleInterviewCommand,
    ) -> Result<Interview, ScheduleInterviewError> {
        self.validate_existence(&command).await?;
        Self::validate_mode_fields(&command)?;
        Self::validate_schedule_date(&command)?;

        let mut data = NewInterview {
            scheduled_date: command.scheduled_date,
            scheduled_time: command.scheduled_time,
            duration_minutes: command.duration_minutes,
            mode: command.mode,
            status: InterviewStatus::Scheduled,
            meeting_title: command.meeting_title.clone(),
            meeting_link: None,
            location: None,
            description: command.description.clone(),
            candidate_id: command.candidate_id,
            job_id: command.job_id,
            user_email: command.user_email.clone(),
        };

        match command.mode {
            InterviewMode::Online => {
                let start = command.scheduled_date.and_time(command.scheduled_time);
                let end = start + Duration::minutes(command.duration_minutes as i64);
                let title = command.meeting_title.as_deref().unwrap_or_default();
                let details = self
                    .provisioner
                    .create_meeting(title, start, end)
                    .await
                    .map_err(|e| {
                        error!(
                            "Failed to provision meeting for candidate {}: {}",
                            command.candidate_id, e
                        );
                        ScheduleInterviewError::MeetingUnavailable
                    })?;
                data.meeting_link = Some(details.meeting_link);
            }
            InterviewMode::InPerson => {
                data.location = command.location.clone();
            }
        }

        let created = self.repository.insert(data).await.map_err(|e| match e {
            InterviewRepositoryError::DatabaseError(msg)
            | InterviewRepositoryError::SerializationError(msg) => {
                ScheduleInterviewError::RepositoryError(msg)
            }
            InterviewRepositoryError::NotFound => {
                ScheduleInterviewError::RepositoryError("unexpected not found".to_string())
            }
        })?;

        info!(
            "Scheduled interview {} for candidate {}",
            created.id, created.candidate_id
        );

        self.refresh_cache(&created).await;
        self.notifier.notify_created(&created).await;

        Ok(created)
    }
}
