use async_trait::async_trait;
use tracing::warn;

use crate::modules::interview::application::ports::incoming::use_cases::{
    RecordInterviewFeedbackError, RecordInterviewFeedbackUseCase,
};
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    by_id_key, CacheRegion, InterviewCache, MutationKind,
};
use crate::modules::interview::application::ports::outgoing::interview_query::InterviewQuery;
use crate::modules::interview::application::ports::outgoing::interview_repository::InterviewRepository;
use crate::modules::interview::domain::entities::Interview;

/// Feedback is orthogonal to scheduling, so this clears only the status
/// regions (feedback rides along in those cached rows) and writes the
/// record through by id.
pub struct RecordInterviewFeedbackService<Q, R, C>
where
    Q: InterviewQuery,
    R: InterviewRepository,
    C: InterviewCache,
{
    query: Q,
    repository: R,
    cache: C,
}

impl<Q, R, C> RecordInterviewFeedbackService<Q, R, C>
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

    async fn load(&self, id: i64) -> Result<Interview, RecordInterviewFeedbackError> {
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
            .map_err(|e| RecordInterviewFeedbackError::RepositoryError(e.to_string()))?
            .ok_or(RecordInterviewFeedbackError::InterviewNotFound(id))
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
            .invalidate_regions(MutationKind::FeedbackChange.invalidated_regions())
            .await
        {
            warn!(
                "Cache invalidation failed after feedback change on interview {}: {}",
                interview.id, e
            );
        }
    }
}

#[async_trait]
impl<Q, R, C> RecordInterviewFeedbackUseCase for RecordInterviewFeedbackService<Q, R, C>
where
    Q: InterviewQuery + Send + Sync,
    R: InterviewRepository + Send + Sync,
    C: InterviewCache + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        feedback: String,
    ) -> Result<Interview, RecordInterviewFeedbackError> {
        let mut interview = self.load(id).await?;
        interview.feedback = Some(feedback);

        let saved = self
            .repository
            .update(interview)
            .await
            .map_err(|e| RecordInterviewFeedbackError::RepositoryError(e.to_string()))?;

        self.refresh_cache(&saved).await;
        Ok(saved)
    }
}
