use async_trait::async_trait;
use tracing::warn;

use crate::modules::interview::application::ports::incoming::use_cases::{
    UpdateInterviewStatusError, UpdateInterviewStatusUseCase,
};
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    by_id_key, CacheRegion, InterviewCache, MutationKind,
};
use crate::modules::interview::application::ports::outgoing::interview_query::InterviewQuery;
use crate::modules::interview::application::ports::outgoing::interview_repository::InterviewRepository;
use crate::modules::interview::domain::entities::{Interview, InterviewStatus};

/// Single-field status mutation. Invalidates only the regions that key off
/// status, rather than the broad create/update set.
pub struct UpdateInterviewStatusService<Q, R, C>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    C: InterviewCache,
{
    query: Q,
    repository: R,
    cache: C,
}

impl<Q, R, C> UpdateInterviewStatusService<Q, R, C>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    C: InterviewCache,
{
    pub fn new(query: Q, repository: R, cache: C) -> Self {
        Self {
            query,
            repository,
            cache,
        }
    }

    async fn load(&self, id: i64) -> Result<Interview, UpdateInterviewStatusError> {
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
            .map_err(|e| UpdateInterviewStatusError::RepositoryError(e.to_string()))?
            .ok_or(UpdateInterviewStatusError::InterviewNotFound(id))
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
            .invalidate_regions(MutationKind::StatusChange.invalidated_regions())
            .await
        {
            warn!(
                "Cache invalidation failed after status change on interview {}: {}",
                interview.id, e
            );
        }
    }
}

#[async_trait]
impl<Q, R, C> UpdateInterviewStatusUseCase for UpdateInterviewStatusService<Q, R, C>
where
    Q: InterviewQuery + Send + Sync,
    R: InterviewRepository + Send + Sync,
    C: InterviewCache + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        status: InterviewStatus,
    ) -> Result<Interview, UpdateInterviewStatusError> {
        let mut interview = self.load(id).await?;
        interview.status = status;

        let saved = self
            .repository
            .update(interview)
            .await
            .map_err(|e| UpdateInterviewStatusError::RepositoryError(e.to_string()))?;

        self.refresh_cache(&saved).await;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::online_interview;
    use crate::tests::support::mocks::{RecordingCache, RecordingRepository, StubQuery};

    #[tokio::test]
    async fn status_is_replaced_and_nothing_else_changes() {
        let existing = online_interview(3);
        let repository = RecordingRepository::with_existing(vec![existing.clone()]);
        let svc = UpdateInterviewStatusService::new(
            StubQuery::with_records(vec![existing.clone()]),
            repository.clone(),
            RecordingCache::default(),
        );

        let saved = svc.execute(3, InterviewStatus::Completed).await.unwrap();

        assert_eq!(saved.status, InterviewStatus::Completed);
        assert_eq!(saved.meeting_link, existing.meeting_link);
        assert_eq!(saved.scheduled_date, existing.scheduled_date);
    }

    #[tokio::test]
    async fn any_status_value_is_accepted() {
        let existing = online_interview(3);
        let svc = UpdateInterviewStatusService::new(
            StubQuery::with_records(vec![existing.clone()]),
            RecordingRepository::with_existing(vec![existing]),
            RecordingCache::default(),
        );

        // No transition table: even cancelled → scheduled goes through here.
        svc.execute(3, InterviewStatus::Cancelled).await.unwrap();
        let saved = svc.execute(3, InterviewStatus::NoShow).await.unwrap();
        assert_eq!(saved.status, InterviewStatus::NoShow);
    }

    #[tokio::test]
    async fn status_change_uses_the_narrow_invalidation_row() {
        let existing = online_interview(3);
        let cache = RecordingCache::default();
        let svc = UpdateInterviewStatusService::new(
            StubQuery::with_records(vec![existing.clone()]),
            RecordingRepository::with_existing(vec![existing]),
            cache.clone(),
        );

        svc.execute(3, InterviewStatus::Completed).await.unwrap();

        assert_eq!(
            cache.invalidations(),
            vec![MutationKind::StatusChange.invalidated_regions().to_vec()]
        );
    }

    #[tokio::test]
    async fn unknown_interview_is_not_found() {
        let svc = UpdateInterviewStatusService::new(
            StubQuery::default(),
            RecordingRepository::default(),
            RecordingCache::default(),
        );

        let err = svc
            .execute(77, InterviewStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UpdateInterviewStatusError::InterviewNotFound(77)
        ));
    }
}
