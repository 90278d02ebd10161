use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::modules::interview::application::ports::outgoing::event_publisher::{
    EventPublishError, InterviewCancelledEvent, InterviewCreatedEvent, InterviewEventPublisher,
    InterviewUpdatedEvent, INTERVIEW_CANCELLED_TOPIC, INTERVIEW_CREATED_TOPIC,
    INTERVIEW_UPDATED_TOPIC,
};
use crate::modules::interview::application::ports::outgoing::jobs_directory::{
    DirectoryError, JobsDirectory,
};
use crate::modules::interview::domain::entities::Interview;

#[derive(Debug, thiserror::Error)]
enum NotifyError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Publish(#[from] EventPublishError),
}

/// Fire-and-forget boundary for the interview topics.
///
/// Payload assembly resolves the display fields (job title, candidate email)
/// from the jobs service at publish time; the validation round earlier in the
/// operation only returned booleans. Any failure — assembly or publish — is
/// logged here and never reaches the caller: by the time notification runs,
/// the mutation is already durable.
#[derive(Clone)]
pub struct InterviewNotifier<J, P>
where
    J: JobsDirectory,
    P: InterviewEventPublisher,
{
    jobs: J,
    publisher: P,
}

impl<J, P> InterviewNotifier<J, P>
where
    J: JobsDirectory,
    P: InterviewEventPublisher,
{
    pub fn new(jobs: J, publisher: P) -> Self {
        Self { jobs, publisher }
    }

    pub async fn notify_created(&self, interview: &Interview) {
        if let Err(e) = self.try_notify_created(interview).await {
            warn!(
                "Failed to publish {} event for interview {}: {}",
                INTERVIEW_CREATED_TOPIC, interview.id, e
            );
        }
    }

    pub async fn notify_updated(
        &self,
        interview: &Interview,
        previous_date: NaiveDate,
        previous_time: NaiveTime,
        time_changed: bool,
        mode_changed: bool,
        location_changed: bool,
    ) {
        if let Err(e) = self
            .try_notify_updated(
                interview,
                previous_date,
                previous_time,
                time_changed,
                mode_changed,
                location_changed,
            )
            .await
        {
            warn!(
                "Failed to publish {} event for interview {}: {}",
                INTERVIEW_UPDATED_TOPIC, interview.id, e
            );
        }
    }

    pub async fn notify_cancelled(&self, interview: &Interview, reason: String) {
        if let Err(e) = self.try_notify_cancelled(interview, reason).await {
            warn!(
                "Failed to publish {} event for interview {}: {}",
                INTERVIEW_CANCELLED_TOPIC, interview.id, e
            );
        }
    }

    async fn try_notify_created(&self, interview: &Interview) -> Result<(), NotifyError> {
        let job_title = self.jobs.job_title_by_id(interview.job_id).await?;
        let candidate_email = self
            .jobs
            .candidate_email_by_id(interview.candidate_id)
            .await?;

        let event = InterviewCreatedEvent {
            interviewer_email: interview.user_email.clone(),
            job_title,
            meeting_title: interview.meeting_title.clone(),
            date: interview.scheduled_date,
            time: interview.scheduled_time,
            mode: interview.mode,
            location: interview.location.clone(),
            meeting_link: interview.meeting_link.clone(),
            description: interview.description.clone(),
            candidate_email,
            duration_minutes: interview.duration_minutes,
        };

        self.publisher.publish_created(event).await?;
        info!(
            "Published {} event for interview {}",
            INTERVIEW_CREATED_TOPIC, interview.id
        );
        Ok(())
    }

    async fn try_notify_updated(
        &self,
        interview: &Interview,
        previous_date: NaiveDate,
        previous_time: NaiveTime,
        time_changed: bool,
        mode_changed: bool,
        location_changed: bool,
    ) -> Result<(), NotifyError> {
        let job_title = self.jobs.job_title_by_id(interview.job_id).await?;
        let candidate_email = self
            .jobs
            .candidate_email_by_id(interview.candidate_id)
            .await?;

        let event = InterviewUpdatedEvent {
            interviewer_email: interview.user_email.clone(),
            candidate_email,
            job_title,
            previous_date,
            previous_time,
            new_date: interview.scheduled_date,
            new_time: interview.scheduled_time,
            mode: interview.mode,
            location: interview.location.clone(),
            meeting_link: interview.meeting_link.clone(),
            description: interview.description.clone(),
            time_changed,
            mode_changed,
            location_changed,
        };

        self.publisher.publish_updated(event).await?;
        info!(
            "Published {} event for interview {}",
            INTERVIEW_UPDATED_TOPIC, interview.id
        );
        Ok(())
    }

    async fn try_notify_cancelled(
        &self,
        interview: &Interview,
        reason: String,
    ) -> Result<(), NotifyError> {
        let job_title = self.jobs.job_title_by_id(interview.job_id).await?;
        let candidate_email = self
            .jobs
            .candidate_email_by_id(interview.candidate_id)
            .await?;

        let event = InterviewCancelledEvent {
            interviewer_email: interview.user_email.clone(),
            candidate_email,
            job_title,
            scheduled_date: interview.scheduled_date,
            scheduled_time: interview.scheduled_time,
            cancellation_reason: reason,
        };

        self.publisher.publish_cancelled(event).await?;
        info!(
            "Published {} event for interview {}",
            INTERVIEW_CANCELLED_TOPIC, interview.id
        );
        Ok(())
    }
}
