use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};

use crate::modules::interview::application::ports::outgoing::interview_query::PageRequest;
use crate::modules::interview::domain::entities::{
    InterviewFilter, InterviewMode, InterviewStatus,
};

//
// ──────────────────────────────────────────────────────────
// Regions
// ──────────────────────────────────────────────────────────
//
// The read cache is partitioned into named regions. Every cached entry
// belongs to exactly one region and is addressed by (region, key); the key
// is derived from the query parameters by the builders below. Invalidation
// always clears a region wholesale — a new or changed row can affect any
// paginated or aggregated view inside it, and per-key tracking of which
// queries a row touches is not attempted.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheRegion {
    ById,
    List,
    CountTotal,
    ByCandidate,
    ByCandidateCount,
    ByStatus,
    ByStatusCount,
    ByMode,
    ByModeCount,
    Filtered,
}

impl CacheRegion {
    pub fn prefix(&self) -> &'static str {
        match self {
            CacheRegion::ById => "by-id",
            CacheRegion::List => "list",
            CacheRegion::CountTotal => "count-total",
            CacheRegion::ByCandidate => "by-candidate",
            CacheRegion::ByCandidateCount => "by-candidate-count",
            CacheRegion::ByStatus => "by-status",
            CacheRegion::ByStatusCount => "by-status-count",
            CacheRegion::ByMode => "by-mode",
            CacheRegion::ByModeCount => "by-mode-count",
            CacheRegion::Filtered => "filtered",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Invalidation table
// ──────────────────────────────────────────────────────────
//
// Static map from mutation kind to the regions it clears. `by-id` is never
// in a row: the mutated entity is written through instead of evicted, so an
// immediately-subsequent get-by-id does not reload.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Reschedule,
    StatusChange,
    FeedbackChange,
    Cancel,
}

impl MutationKind {
    pub fn invalidated_regions(&self) -> &'static [CacheRegion] {
        match self {
            MutationKind::Create => &[
                CacheRegion::List,
                CacheRegion::CountTotal,
                CacheRegion::ByCandidate,
                CacheRegion::ByCandidateCount,
                CacheRegion::ByStatus,
                CacheRegion::ByStatusCount,
                CacheRegion::ByMode,
                CacheRegion::ByModeCount,
                CacheRegion::Filtered,
            ],
            // Row count is unchanged by an update, so count-total survives.
            MutationKind::Reschedule => &[
                CacheRegion::List,
                CacheRegion::ByCandidate,
                CacheRegion::ByCandidateCount,
                CacheRegion::ByStatus,
                CacheRegion::ByStatusCount,
                CacheRegion::ByMode,
                CacheRegion::ByModeCount,
                CacheRegion::Filtered,
            ],
            MutationKind::StatusChange => &[
                CacheRegion::List,
                CacheRegion::ByStatus,
                CacheRegion::ByStatusCount,
                CacheRegion::Filtered,
            ],
            MutationKind::FeedbackChange => {
                &[CacheRegion::ByStatus, CacheRegion::ByStatusCount]
            }
            MutationKind::Cancel => &[
                CacheRegion::List,
                CacheRegion::ByStatus,
                CacheRegion::ByStatusCount,
                CacheRegion::Filtered,
            ],
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Key builders
// ──────────────────────────────────────────────────────────
//

pub fn by_id_key(id: i64) -> String {
    id.to_string()
}

pub fn list_key(page: PageRequest) -> String {
    format!("page:{}:size:{}", page.page, page.size)
}

pub fn count_total_key() -> String {
    "total".to_string()
}

pub fn by_candidate_key(candidate_id: i64, page: PageRequest) -> String {
    format!("{}:page:{}:size:{}", candidate_id, page.page, page.size)
}

pub fn by_candidate_count_key(candidate_id: i64) -> String {
    candidate_id.to_string()
}

pub fn by_status_key(status: InterviewStatus, page: PageRequest) -> String {
    format!("{}:page:{}:size:{}", status, page.page, page.size)
}

pub fn by_status_count_key(status: InterviewStatus) -> String {
    status.to_string()
}

pub fn by_mode_key(mode: InterviewMode, page: PageRequest) -> String {
    format!("{}:page:{}:size:{}", mode, page.page, page.size)
}

pub fn by_mode_count_key(mode: InterviewMode) -> String {
    mode.to_string()
}

/// Ad-hoc filter combinations are keyed by a digest of the filter plus the
/// pagination, so equal queries share an entry.
pub fn filtered_key(filter: &InterviewFilter, page: PageRequest) -> String {
    let filter_json = serde_json::to_string(filter).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(filter_json.as_bytes());
    hasher.update(format!(":page:{}:size:{}", page.page, page.size).as_bytes());
    let digest = hasher.finalize();
    format!("{:x}", digest)
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum InterviewCacheError {
    #[error("Cache error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait InterviewCache: Send + Sync {
    async fn get(
        &self,
        region: CacheRegion,
        key: &str,
    ) -> Result<Option<JsonValue>, InterviewCacheError>;

    async fn put(
        &self,
        region: CacheRegion,
        key: &str,
        value: &JsonValue,
    ) -> Result<(), InterviewCacheError>;

    /// Clears each listed region entirely.
    async fn invalidate_regions(
        &self,
        regions: &[CacheRegion],
    ) -> Result<(), InterviewCacheError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::interview::domain::entities::TimeRange;

    #[test]
    fn create_clears_every_listing_region() {
        let regions = MutationKind::Create.invalidated_regions();
        for region in [
            CacheRegion::List,
            CacheRegion::CountTotal,
            CacheRegion::ByCandidate,
            CacheRegion::ByCandidateCount,
            CacheRegion::ByStatus,
            CacheRegion::ByStatusCount,
            CacheRegion::ByMode,
            CacheRegion::ByModeCount,
            CacheRegion::Filtered,
        ] {
            assert!(regions.contains(&region), "create must clear {:?}", region);
        }
        assert!(!regions.contains(&CacheRegion::ById));
    }

    #[test]
    fn reschedule_keeps_count_total() {
        let regions = MutationKind::Reschedule.invalidated_regions();
        assert!(!regions.contains(&CacheRegion::CountTotal));
        assert!(regions.contains(&CacheRegion::List));
        assert!(regions.contains(&CacheRegion::Filtered));
    }

    #[test]
    fn status_change_is_narrower_than_create() {
        let regions = MutationKind::StatusChange.invalidated_regions();
        assert_eq!(
            regions,
            &[
                CacheRegion::List,
                CacheRegion::ByStatus,
                CacheRegion::ByStatusCount,
                CacheRegion::Filtered,
            ][..]
        );
    }

    #[test]
    fn feedback_change_touches_only_status_regions() {
        assert_eq!(
            MutationKind::FeedbackChange.invalidated_regions(),
            &[CacheRegion::ByStatus, CacheRegion::ByStatusCount][..]
        );
    }

    #[test]
    fn cancel_clears_list_and_status_regions() {
        let regions = MutationKind::Cancel.invalidated_regions();
        assert!(regions.contains(&CacheRegion::List));
        assert!(regions.contains(&CacheRegion::ByStatus));
        assert!(!regions.contains(&CacheRegion::ByCandidate));
    }

    #[test]
    fn no_mutation_evicts_by_id() {
        for kind in [
            MutationKind::Create,
            MutationKind::Reschedule,
            MutationKind::StatusChange,
            MutationKind::FeedbackChange,
            MutationKind::Cancel,
        ] {
            assert!(!kind.invalidated_regions().contains(&CacheRegion::ById));
        }
    }

    #[test]
    fn key_shapes_are_deterministic() {
        let page = PageRequest { page: 0, size: 10 };
        assert_eq!(list_key(page), "page:0:size:10");
        assert_eq!(by_candidate_key(42, page), "42:page:0:size:10");
        assert_eq!(
            by_status_key(InterviewStatus::Cancelled, page),
            "CANCELLED:page:0:size:10"
        );
        assert_eq!(by_mode_key(InterviewMode::Online, page), "ONLINE:page:0:size:10");
        assert_eq!(count_total_key(), "total");
        assert_eq!(by_id_key(9), "9");
    }

    #[test]
    fn equal_filters_share_a_key_and_different_filters_do_not() {
        let page = PageRequest { page: 0, size: 10 };
        let a = InterviewFilter {
            time_range: Some(TimeRange::NextWeek),
            ..Default::default()
        };
        let b = a.clone();
        let c = InterviewFilter {
            time_range: Some(TimeRange::NextMonth),
            ..Default::default()
        };
        assert_eq!(filtered_key(&a, page), filtered_key(&b, page));
        assert_ne!(filtered_key(&a, page), filtered_key(&c, page));
        assert_ne!(
            filtered_key(&a, page),
            filtered_key(&a, PageRequest { page: 1, size: 10 })
        );
    }
}
