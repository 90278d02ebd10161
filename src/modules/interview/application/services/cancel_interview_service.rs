use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::interview::application::ports::incoming::use_cases::{
    CancelInterviewError, CancelInterviewUseCase,
};
use crate::modules::interview::application::ports::outgoing::event_publisher::InterviewEventPublisher;
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    by_id_key, CacheRegion, InterviewCache, MutationKind,
};
use crate::modules::interview::application::ports::outgoing::interview_query::InterviewQuery;
use crate::modules::interview::application::ports::outgoing::interview_repository::InterviewRepository;
use crate::modules::interview::application::ports::outgoing::jobs_directory::JobsDirectory;
use crate::modules::interview::application::services::interview_notifier::InterviewNotifier;
use crate::modules::interview::domain::entities::{Interview, InterviewStatus};

const DEFAULT_CANCELLATION_REASON: &str = "No reason provided";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//
// Cancellation forces CANCELLED unconditionally: a second cancel finds the
// record already cancelled and simply writes it again. Terminality is a
// convention of this use case, not a store constraint.
//

pub struct CancelInterviewService<Q, R, C, J, P>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    C: InterviewCache,
    J: JobsDirectory,
    P: InterviewEventPublisher,
{
    query: Q,
    repository: R,
    cache: C,
    notifier: InterviewNotifier<J, P>,
}

impl<Q, R, C, J, P> CancelInterviewService<Q, R, C, J, P>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    C: InterviewCache,
    J: JobsDirectory,
    P: InterviewEventPublisher,
{
    pub fn new(query: Q, repository: R, cache: C, notifier: InterviewNotifier<J, P>) -> Self {
        Self {
            query,
            repository,
            cache,
            notifier,
        }
    }

    async fn load(&self, id: i64) -> Result<Interview, CancelInterviewError> {
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
            .map_err(|e| CancelInterviewError::RepositoryError(e.to_string()))?
            .ok_or(CancelInterviewError::InterviewNotFound(id))
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
            .invalidate_regions(MutationKind::Cancel.invalidated_regions())
            .await
        {
            warn!(
                "Cache invalidation failed after cancelling interview {}: {}",
                interview.id, e
            );
        }
    }
}

#[async_trait]
impl<Q, R, C, J, P> CancelInterviewUseCase for CancelInterviewService<Q, R, C, J, P>
where
    Q: InterviewQuery + Send + Sync,
    R: InterviewRepository + Send + Sync,
    C: InterviewCache + Send + Sync,
    J: JobsDirectory + Send + Sync,
    P: InterviewEventPublisher + Send + Sync,
{
    async fn execute(&self, id: i64, reason: Option<String>) -> Result<(), CancelInterviewError> {
        let mut interview = self.load(id).await?;
        interview.status = InterviewStatus::Cancelled;

        let saved = self
            .repository
            .update(interview)
            .await
            .map_err(|e| CancelInterviewError::RepositoryError(e.to_string()))?;

        info!("Cancelled interview {}", saved.id);

        self.refresh_cache(&saved).await;

        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CANCELLATION_REASON.to_string());
        self.notifier.notify_cancelled(&saved, reason).await;

        Ok(())
    }
}
