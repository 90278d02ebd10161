use async_trait::async_trait;

use crate::modules::interview::application::ports::outgoing::jobs_directory::DirectoryError;

/// Remote auth service; answers whether an interviewer identity exists.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn user_exists(&self, email: &str) -> Result<bool, DirectoryError>;
}
