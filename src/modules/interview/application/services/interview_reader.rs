use std::future::Future;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::modules::interview::application::ports::incoming::use_cases::{
    FilterInterviewsError, FilterInterviewsUseCase, GetInterviewError, GetInterviewUseCase,
    ListInterviewsError, ListInterviewsUseCase,
};
use crate::modules::interview::application::ports::outgoing::interview_cache::{
    by_candidate_count_key, by_candidate_key, by_id_key, by_mode_count_key, by_mode_key,
    by_status_count_key, by_status_key, count_total_key, filtered_key, list_key, CacheRegion,
    InterviewCache,
};
use crate::modules::interview::application::ports::outgoing::interview_query::{
    InterviewQuery, InterviewQueryError, PageRequest, PageResult,
};
use crate::modules::interview::application::ports::outgoing::jobs_directory::JobsDirectory;
use crate::modules::interview::domain::entities::{
    Interview, InterviewFilter, InterviewMode, InterviewStatus,
};

//
// ──────────────────────────────────────────────────────────
// Reader (cache-through read side)
// ──────────────────────────────────────────────────────────
//
// Every read goes cache-first; a miss loads from the store and populates
// the entry. List content and total count are separate entries that may be
// populated at different moments; the composed page tolerates that. Cache
// failures degrade to plain store reads.
//

pub struct InterviewReader<Q, C, J>
where
    Q: InterviewQuery,
    C: InterviewCache,
    J: JobsDirectory,
{
    query: Q,
    cache: C,
    jobs: J,
}

impl<Q, C, J> InterviewReader<Q, C, J>
where
    Q: InterviewQuery,
    C: InterviewCache,
    J: JobsDirectory,
{
    pub fn new(query: Q, cache: C, jobs: J) -> Self {
        Self { query, cache, jobs }
    }

    async fn read_through<T>(
        &self,
        region: CacheRegion,
        key: &str,
        load: impl Future<Output = Result<T, InterviewQueryError>> + Send,
    ) -> Result<T, InterviewQueryError>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.cache.get(region, key).await {
            Ok(Some(json)) => match serde_json::from_value::<T>(json) {
                Ok(value) => return Ok(value),
                Err(e) => warn!(
                    "Discarding undecodable cache entry {}:{}: {}",
                    region.prefix(),
                    key,
                    e
                ),
            },
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for {}:{}: {}", region.prefix(), key, e),
        }

        let value = load.await?;

        match serde_json::to_value(&value) {
            Ok(json) => {
                if let Err(e) = self.cache.put(region, key, &json).await {
                    warn!(
                        "Cache populate failed for {}:{}: {}",
                        region.prefix(),
                        key,
                        e
                    );
                }
            }
            Err(e) => warn!(
                "Could not serialize value for cache entry {}:{}: {}",
                region.prefix(),
                key,
                e
            ),
        }

        Ok(value)
    }

    fn compose_page(
        items: Vec<Interview>,
        total: u64,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        if items.is_empty() {
            return Err(ListInterviewsError::NoInterviewsFound);
        }
        Ok(PageResult {
            items,
            page: page.page,
            size: page.size,
            total,
        })
    }
}

fn map_query_err(e: InterviewQueryError) -> ListInterviewsError {
    ListInterviewsError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, C, J> GetInterviewUseCase for InterviewReader<Q, C, J>
where
    Q: InterviewQuery + Send + Sync,
    C: InterviewCache + Send + Sync,
    J: JobsDirectory + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Interview, GetInterviewError> {
        let key = by_id_key(id);
        match self.cache.get(CacheRegion::ById, &key).await {
            Ok(Some(json)) => {
                if let Ok(interview) = serde_json::from_value::<Interview>(json) {
                    return Ok(interview);
                }
                warn!("Discarding undecodable cache entry for interview {}", id);
            }
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for interview {}: {}", id, e),
        }

        let interview = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| GetInterviewError::RepositoryError(e.to_string()))?
            .ok_or(GetInterviewError::InterviewNotFound(id))?;

        match serde_json::to_value(&interview) {
            Ok(json) => {
                if let Err(e) = self.cache.put(CacheRegion::ById, &key, &json).await {
                    warn!("Cache populate failed for interview {}: {}", id, e);
                }
            }
            Err(e) => warn!("Could not serialize interview {} for cache: {}", id, e),
        }

        Ok(interview)
    }
}

#[async_trait]
impl<Q, C, J> ListInterviewsUseCase for InterviewReader<Q, C, J>
where
    Q: InterviewQuery + Send + Sync,
    C: InterviewCache + Send + Sync,
    J: JobsDirectory + Send + Sync,
{
    async fn all(&self, page: PageRequest) -> Result<PageResult<Interview>, ListInterviewsError> {
        let items_key = list_key(page);
        let total_key = count_total_key();
        // Content and count are independent entries; fetching them together
        // still leaves them free to disagree within the accepted window.
        let (items, total) = futures::future::try_join(
            self.read_through(CacheRegion::List, &items_key, self.query.list(page)),
            self.read_through(CacheRegion::CountTotal, &total_key, self.query.count()),
        )
        .await
        .map_err(map_query_err)?;
        Self::compose_page(items, total, page)
    }

    async fn by_candidate(
        &self,
        candidate_id: i64,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        let candidate_found = self
            .jobs
            .candidate_exists(candidate_id)
            .await
            .map_err(|e| ListInterviewsError::ValidatorUnavailable(e.to_string()))?;
        if !candidate_found {
            return Err(ListInterviewsError::CandidateNotFound(candidate_id));
        }

        let items_key = by_candidate_key(candidate_id, page);
        let total_key = by_candidate_count_key(candidate_id);
        let (items, total) = futures::future::try_join(
            self.read_through(
                CacheRegion::ByCandidate,
                &items_key,
                self.query.list_by_candidate(candidate_id, page),
            ),
            self.read_through(
                CacheRegion::ByCandidateCount,
                &total_key,
                self.query.count_by_candidate(candidate_id),
            ),
        )
        .await
        .map_err(map_query_err)?;
        Self::compose_page(items, total, page)
    }

    async fn by_status(
        &self,
        status: InterviewStatus,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        let items_key = by_status_key(status, page);
        let total_key = by_status_count_key(status);
        let (items, total) = futures::future::try_join(
            self.read_through(
                CacheRegion::ByStatus,
                &items_key,
                self.query.list_by_status(status, page),
            ),
            self.read_through(
                CacheRegion::ByStatusCount,
                &total_key,
                self.query.count_by_status(status),
            ),
        )
        .await
        .map_err(map_query_err)?;
        Self::compose_page(items, total, page)
    }

    async fn by_mode(
        &self,
        mode: InterviewMode,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, ListInterviewsError> {
        let items_key = by_mode_key(mode, page);
        let total_key = by_mode_count_key(mode);
        let (items, total) = futures::future::try_join(
            self.read_through(
                CacheRegion::ByMode,
                &items_key,
                self.query.list_by_mode(mode, page),
            ),
            self.read_through(
                CacheRegion::ByModeCount,
                &total_key,
                self.query.count_by_mode(mode),
            ),
        )
        .await
        .map_err(map_query_err)?;
        Self::compose_page(items, total, page)
    }
}

#[async_trait]
impl<Q, C, J> FilterInterviewsUseCase for InterviewReader<Q, C, J>
where
    Q: InterviewQuery + Send + Sync,
    C: InterviewCache + Send + Sync,
    J: JobsDirectory + Send + Sync,
{
    async fn execute(
        &self,
        filter: InterviewFilter,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, FilterInterviewsError> {
        filter
            .validate()
            .map_err(FilterInterviewsError::InvalidFilter)?;

        let result = self
            .read_through(
                CacheRegion::Filtered,
                &filtered_key(&filter, page),
                self.query.list_filtered(&filter, page),
            )
            .await
            .map_err(|e| FilterInterviewsError::RepositoryError(e.to_string()))?;

        if result.items.is_empty() {
            return Err(FilterInterviewsError::NoInterviewsFound);
        }
        Ok(result)
    }
}
