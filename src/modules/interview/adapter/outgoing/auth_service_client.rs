use async_trait::async_trait;

use crate::modules::interview::application::ports::outgoing::jobs_directory::DirectoryError;
use crate::modules::interview::application::ports::outgoing::user_directory::UserDirectory;

/// HTTP client for the auth service's interviewer-existence check.
#[derive(Clone)]
pub struct AuthServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthServiceClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl UserDirectory for AuthServiceClient {
    async fn user_exists(&self, email: &str) -> Result<bool, DirectoryError> {
        let url = format!("{}/api/user/check-user/{}", self.base_url, email);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        response
            .json::<bool>()
            .await
            .map_err(|e| DirectoryError::MalformedResponse(e.to_string()))
    }
}
