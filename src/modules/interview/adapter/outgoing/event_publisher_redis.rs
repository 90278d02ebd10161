use async_trait::async_trait;
use deadpool_redis::Pool;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::interview::application::ports::outgoing::event_publisher::{
    EventPublishError, InterviewCancelledEvent, InterviewCreatedEvent, InterviewEventPublisher,
    InterviewUpdatedEvent, INTERVIEW_CANCELLED_TOPIC, INTERVIEW_CREATED_TOPIC,
    INTERVIEW_UPDATED_TOPIC,
};

/// Publishes interview events as JSON on Redis pub/sub channels, one channel
/// per topic. Delivery is at-most-once; the notifier upstream already treats
/// every publish as best effort.
#[derive(Clone)]
pub struct EventPublisherRedis {
    pool: Arc<Pool>,
}

impl EventPublisherRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    async fn publish<T: Serialize + Sync>(
        &self,
        topic: &str,
        event: &T,
    ) -> Result<(), EventPublishError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| EventPublishError::SerializationError(e.to_string()))?;

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| EventPublishError::PublishFailed(format!("Pool error: {}", e)))?;

        deadpool_redis::redis::cmd("PUBLISH")
            .arg(topic)
            .arg(payload)
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| EventPublishError::PublishFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl InterviewEventPublisher for EventPublisherRedis {
    async fn publish_created(
        &self,
        event: InterviewCreatedEvent,
    ) -> Result<(), EventPublishError> {
        self.publish(INTERVIEW_CREATED_TOPIC, &event).await
    }

    async fn publish_updated(
        &self,
        event: InterviewUpdatedEvent,
    ) -> Result<(), EventPublishError> {
        self.publish(INTERVIEW_UPDATED_TOPIC, &event).await
    }

    async fn publish_cancelled(
        &self,
        event: InterviewCancelledEvent,
    ) -> Result<(), EventPublishError> {
        self.publish(INTERVIEW_CANCELLED_TOPIC, &event).await
    }
}
