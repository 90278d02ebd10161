use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::interview::domain::entities::{
    Interview, InterviewFilter, InterviewMode, InterviewStatus,
};

//
// ──────────────────────────────────────────────────────────
// Pagination
// ──────────────────────────────────────────────────────────
//

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 15 }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum InterviewQueryError {
    #[error("Interview not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side; list content and counts are separate calls
// so the cache can hold them as separate entries)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait InterviewQuery: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Interview>, InterviewQueryError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Interview>, InterviewQueryError>;

    async fn count(&self) -> Result<u64, InterviewQueryError>;

    async fn list_by_candidate(
        &self,
        candidate_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError>;

    async fn count_by_candidate(&self, candidate_id: i64) -> Result<u64, InterviewQueryError>;

    async fn list_by_status(
        &self,
        status: InterviewStatus,
        page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError>;

    async fn count_by_status(&self, status: InterviewStatus) -> Result<u64, InterviewQueryError>;

    async fn list_by_mode(
        &self,
        mode: InterviewMode,
        page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError>;

    async fn count_by_mode(&self, mode: InterviewMode) -> Result<u64, InterviewQueryError>;

    /// Dynamic predicate query; content and count in one round trip.
    async fn list_filtered(
        &self,
        filter: &InterviewFilter,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, InterviewQueryError>;
}
