// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Body deserialization failures answer the same envelope as every other
/// validation error instead of actix's default plain-text response.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("MALFORMED_JSON", &message),
        )
        .into()
    })
}
