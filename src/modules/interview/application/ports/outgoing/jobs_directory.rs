use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryError {
    #[error("Remote service unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Remote jobs service. Existence/validity checks answer yes/no only; the
/// referenced records stay owned by the remote side. The display lookups are
/// used when assembling event payloads, not during validation.
#[async_trait]
pub trait JobsDirectory: Send + Sync {
    async fn candidate_exists(&self, candidate_id: i64) -> Result<bool, DirectoryError>;

    /// True when the candidate actually applied to the job, not merely when
    /// both records exist.
    async fn job_application_valid(
        &self,
        job_id: i64,
        candidate_id: i64,
    ) -> Result<bool, DirectoryError>;

    async fn candidate_email_by_id(&self, candidate_id: i64) -> Result<String, DirectoryError>;

    async fn job_title_by_id(&self, job_id: i64) -> Result<String, DirectoryError>;
}
