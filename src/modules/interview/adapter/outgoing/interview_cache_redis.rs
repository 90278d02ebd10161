use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::interview::application::ports::outgoing::interview_cache::{
    CacheRegion, InterviewCache, InterviewCacheError,
};

/// Redis-backed implementation of `InterviewCache`.
///
/// ## Redis data model
///
/// Two kinds of keys per region:
///
/// 1. **Entry key**
/// ```text
/// interviews:{region}:{key} -> JSON value
/// ```
/// - TTL = the policy passed at construction
///
/// 2. **Region index (helper for region-wide eviction)**
/// ```text
/// interviews:index:{region} -> SET(entry key)
/// ```
/// - Tracks every live entry key in the region
/// - Shares the entry TTL so it cannot outlive its newest member forever
///
/// Invalidating a region reads the index with `SMEMBERS` and deletes all
/// listed entry keys plus the index itself in one pipeline. Index members
/// whose entries already expired are deleted harmlessly. Entries are never
/// evicted one by one from the mutation path; correctness comes from the
/// region-wide clear, the TTL is only a backstop.
#[derive(Clone)]
pub struct InterviewCacheRedis {
    pool: Arc<Pool>,
    ttl: Duration,
}

impl InterviewCacheRedis {
    pub fn new(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    fn entry_key(region: CacheRegion, key: &str) -> String {
        format!("interviews:{}:{}", region.prefix(), key)
    }

    fn index_key(region: CacheRegion) -> String {
        format!("interviews:index:{}", region.prefix())
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, InterviewCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| InterviewCacheError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl InterviewCache for InterviewCacheRedis {
    async fn get(
        &self,
        region: CacheRegion,
        key: &str,
    ) -> Result<Option<JsonValue>, InterviewCacheError> {
        let entry_key = Self::entry_key(region, key);
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(&entry_key)
            .await
            .map_err(|e| InterviewCacheError::Backend(e.to_string()))?;

        raw.map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| InterviewCacheError::SerializationError(e.to_string()))
        })
        .transpose()
    }

    /// Store the entry and register it in the region index.
    ///
    /// ```text
    /// SET    interviews:{region}:{key} <json> EX <ttl>
    /// SADD   interviews:index:{region} interviews:{region}:{key}
    /// EXPIRE interviews:index:{region} <ttl>
    /// ```
    ///
    /// Pipelined atomically so an entry can never exist without being listed
    /// in its region index.
    async fn put(
        &self,
        region: CacheRegion,
        key: &str,
        value: &JsonValue,
    ) -> Result<(), InterviewCacheError> {
        let entry_key = Self::entry_key(region, key);
        let index_key = Self::index_key(region);
        let json = serde_json::to_string(value)
            .map_err(|e| InterviewCacheError::SerializationError(e.to_string()))?;
        let ttl = self.ttl.as_secs();

        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&entry_key)
            .arg(json)
            .arg("EX")
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&index_key)
            .arg(&entry_key)
            .ignore()
            .cmd("EXPIRE")
            .arg(&index_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| InterviewCacheError::Backend(e.to_string()))?;

        Ok(())
    }

    /// Clear each region wholesale: read its index, delete every listed
    /// entry and the index itself, all in one atomic pipeline.
    async fn invalidate_regions(
        &self,
        regions: &[CacheRegion],
    ) -> Result<(), InterviewCacheError> {
        let mut conn = self.get_conn().await?;

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic();
        let mut dirty = false;

        for region in regions {
            let index_key = Self::index_key(*region);
            let entries: Vec<String> = conn
                .smembers(&index_key)
                .await
                .map_err(|e| InterviewCacheError::Backend(e.to_string()))?;

            for entry in entries {
                pipe.del(entry).ignore();
                dirty = true;
            }
            pipe.del(&index_key).ignore();
            dirty = true;
        }

        if dirty {
            pipe.query_async::<()>(&mut *conn)
                .await
                .map_err(|e| InterviewCacheError::Backend(e.to_string()))?;
        }

        Ok(())
    }
}
