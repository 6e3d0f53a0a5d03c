use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Body size ceiling for JSON requests; a full portfolio document is well under this.
const JSON_LIMIT_BYTES: usize = 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
