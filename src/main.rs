pub mod modules;
pub use modules::interview;
pub mod health;
pub mod shared;

use crate::interview::adapter::outgoing::auth_service_client::AuthServiceClient;
use crate::interview::adapter::outgoing::event_publisher_redis::EventPublisherRedis;
use crate::interview::adapter::outgoing::google_meet_provisioner::{
    GoogleMeetProvisioner, DEFAULT_CALENDAR_API_URL,
};
use crate::interview::adapter::outgoing::interview_cache_redis::InterviewCacheRedis;
use crate::interview::adapter::outgoing::interview_query_postgres::InterviewQueryPostgres;
use crate::interview::adapter::outgoing::interview_repository_postgres::InterviewRepositoryPostgres;
use crate::interview::adapter::outgoing::jobs_service_client::JobsServiceClient;
use crate::interview::application::services::{
    CancelInterviewService, InterviewNotifier, InterviewReader, RecordInterviewFeedbackService,
    RescheduleInterviewService, ScheduleInterviewService, UpdateInterviewStatusService,
};
use crate::interview::application::InterviewUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub interview: InterviewUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting interview service...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let jobs_service_url =
        env::var("JOBS_SERVICE_URL").expect("JOBS_SERVICE_URL is not set in .env file");
    let auth_service_url =
        env::var("AUTH_SERVICE_URL").expect("AUTH_SERVICE_URL is not set in .env file");
    let calendar_url = env::var("GOOGLE_CALENDAR_URL")
        .unwrap_or_else(|_| DEFAULT_CALENDAR_API_URL.to_string());
    let calendar_token =
        env::var("GOOGLE_CALENDAR_TOKEN").expect("GOOGLE_CALENDAR_TOKEN is not set in .env file");
    let calendar_time_zone =
        env::var("GOOGLE_CALENDAR_TIME_ZONE").unwrap_or_else(|_| "UTC".to_string());
    let cache_ttl_seconds: u64 = env::var("CACHE_TTL_SECONDS")
        .unwrap_or_else(|_| "300".to_string())
        .parse()
        .expect("Invalid CACHE_TTL_SECONDS");
    let remote_timeout_seconds: u64 = env::var("REMOTE_TIMEOUT_SECONDS")
        .unwrap_or_else(|_| "5".to_string())
        .parse()
        .expect("Invalid REMOTE_TIMEOUT_SECONDS");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared HTTP client; the timeout bounds every remote validator and
    // provisioner call so a stalled dependency cannot hang an operation.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(remote_timeout_seconds))
        .build()
        .expect("Failed to build HTTP client");

    // Outgoing adapters
    let repository = InterviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let query = InterviewQueryPostgres::new(Arc::clone(&db_arc));
    let cache = InterviewCacheRedis::new(
        Arc::clone(&redis_arc),
        Duration::from_secs(cache_ttl_seconds),
    );
    let jobs = JobsServiceClient::new(http.clone(), jobs_service_url);
    let users = AuthServiceClient::new(http.clone(), auth_service_url);
    let provisioner = GoogleMeetProvisioner::new(
        http,
        calendar_url,
        calendar_token,
        calendar_time_zone,
    );
    let publisher = EventPublisherRedis::new(Arc::clone(&redis_arc));

    // Application services
    let schedule_service = ScheduleInterviewService::new(
        jobs.clone(),
        users,
        provisioner.clone(),
        repository.clone(),
        cache.clone(),
        InterviewNotifier::new(jobs.clone(), publisher.clone()),
    );
    let reschedule_service = RescheduleInterviewService::new(
        query.clone(),
        repository.clone(),
        provisioner,
        cache.clone(),
        InterviewNotifier::new(jobs.clone(), publisher.clone()),
    );
    let cancel_service = CancelInterviewService::new(
        query.clone(),
        repository.clone(),
        cache.clone(),
        InterviewNotifier::new(jobs.clone(), publisher),
    );
    let status_service =
        UpdateInterviewStatusService::new(query.clone(), repository.clone(), cache.clone());
    let feedback_service =
        RecordInterviewFeedbackService::new(query.clone(), repository, cache.clone());
    let reader = Arc::new(InterviewReader::new(query, cache, jobs));

    let state = AppState {
        interview: InterviewUseCases {
            schedule: Arc::new(schedule_service),
            reschedule: Arc::new(reschedule_service),
            cancel: Arc::new(cancel_service),
            update_status: Arc::new(status_service),
            record_feedback: Arc::new(feedback_service),
            get_single: reader.clone(),
            list: reader.clone(),
            filter: reader,
        },
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::json_config::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Interviews
    cfg.service(crate::interview::adapter::incoming::web::routes::schedule_interview_handler);
    cfg.service(crate::interview::adapter::incoming::web::routes::get_interviews_handler);
    cfg.service(crate::interview::adapter::incoming::web::routes::filter_interviews_handler);
    cfg.service(
        crate::interview::adapter::incoming::web::routes::get_interviews_by_candidate_handler,
    );
    cfg.service(
        crate::interview::adapter::incoming::web::routes::get_interviews_by_status_handler,
    );
    cfg.service(crate::interview::adapter::incoming::web::routes::get_interviews_by_mode_handler);
    cfg.service(crate::interview::adapter::incoming::web::routes::get_single_interview_handler);
    cfg.service(crate::interview::adapter::incoming::web::routes::reschedule_interview_handler);
    cfg.service(
        crate::interview::adapter::incoming::web::routes::update_interview_status_handler,
    );
    cfg.service(
        crate::interview::adapter::incoming::web::routes::record_interview_feedback_handler,
    );
    cfg.service(crate::interview::adapter::incoming::web::routes::cancel_interview_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
