pub mod auth_service_client;
pub mod event_publisher_redis;
pub mod google_meet_provisioner;
pub mod interview_cache_redis;
pub mod interview_query_postgres;
pub mod interview_repository_postgres;
pub mod jobs_service_client;
pub mod sea_orm_entity;
