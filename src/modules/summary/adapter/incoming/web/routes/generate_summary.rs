use actix_web::{http::StatusCode, post, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::summary::application::ports::incoming::use_cases::GenerateSummaryError;
use crate::modules::summary::domain::SummaryInput;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SummaryResponse {
    #[schema(example = "Full-stack developer with five years of experience...")]
    summary: String,
}

/// Generate a portfolio summary
///
/// Admin only. Sends the flattened portfolio to the configured text
/// generator and returns the suggested summary; nothing is stored.
#[utoipa::path(
    post,
    path = "/api/admin/summary",
    tag = "summary",
    request_body = SummaryInput,
    security(("SessionCookie" = []), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Summary generated", body = inline(SuccessResponse<SummaryResponse>)),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 502, description = "Generator failed", body = ErrorResponse),
        (status = 503, description = "Generator not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/summary")]
pub async fn generate_summary_handler(
    _session: AdminSession,
    req: web::Json<SummaryInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.generate_summary_use_case.execute(req.into_inner()).await {
        Ok(summary) => ApiResponse::success(SummaryResponse { summary }),

        Err(GenerateSummaryError::Unavailable) => {
            warn!("Summary requested but no generator is configured");
            ApiResponse::error(
                StatusCode::SERVICE_UNAVAILABLE,
                "SUMMARY_UNAVAILABLE",
                "Summary generation is not configured",
            )
        }

        Err(GenerateSummaryError::GenerationFailed(ref e)) => {
            error!(error = %e, "Summary generation failed");
            ApiResponse::error(
                StatusCode::BAD_GATEWAY,
                "SUMMARY_GENERATION_FAILED",
                "Could not generate a summary",
            )
        }
    }
}
