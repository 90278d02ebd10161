use async_trait::async_trait;

use crate::modules::interview::application::ports::outgoing::jobs_directory::{
    DirectoryError, JobsDirectory,
};

/// HTTP client for the jobs service. Every check is one GET against the
/// endpoints the jobs service exposes for cross-service validation; the
/// shared `reqwest::Client` carries the per-call timeout so a stalled jobs
/// service cannot hang a lifecycle operation.
#[derive(Clone)]
pub struct JobsServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl JobsServiceClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, DirectoryError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| DirectoryError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl JobsDirectory for JobsServiceClient {
    async fn candidate_exists(&self, candidate_id: i64) -> Result<bool, DirectoryError> {
        self.get_json(&format!(
            "/api/jobs/candidates/check-candidate/{}",
            candidate_id
        ))
        .await
    }

    async fn job_application_valid(
        &self,
        job_id: i64,
        candidate_id: i64,
    ) -> Result<bool, DirectoryError> {
        self.get_json(&format!(
            "/api/job-application/validate-application/job/{}/candidate/{}",
            job_id, candidate_id
        ))
        .await
    }

    async fn candidate_email_by_id(&self, candidate_id: i64) -> Result<String, DirectoryError> {
        self.get_json(&format!(
            "/api/jobs/candidates/get-email-by-id/{}",
            candidate_id
        ))
        .await
    }

    async fn job_title_by_id(&self, job_id: i64) -> Result<String, DirectoryError> {
        self.get_json(&format!("/api/jobs/title/{}", job_id)).await
    }
}
