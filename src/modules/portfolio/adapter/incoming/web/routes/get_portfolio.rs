use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::domain::PortfolioData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the portfolio
///
/// Public. Seeds the default dataset on first read.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Current portfolio", body = inline(SuccessResponse<PortfolioData>)),
        (status = 404, description = "No portfolio and seeding failed", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(GetPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetPortfolioError::RepositoryError(msg)) => {
            error!("Repository error fetching portfolio: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
