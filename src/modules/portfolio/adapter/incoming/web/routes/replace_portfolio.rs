use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::portfolio::application::ports::incoming::use_cases::ReplacePortfolioError;
use crate::modules::portfolio::domain::PortfolioPayload;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ReplacePortfolioResponse {
    #[schema(example = "Portfolio updated successfully")]
    message: String,
}

/// Replace the portfolio
///
/// Admin only. The submitted document overwrites the stored one entirely.
#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    request_body = PortfolioPayload,
    security(("SessionCookie" = []), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Portfolio replaced", body = inline(SuccessResponse<ReplacePortfolioResponse>)),
        (status = 400, description = "Missing name or projects", body = ErrorResponse),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse),
    )
)]
#[post("/api/portfolio")]
pub async fn replace_portfolio_handler(
    session: AdminSession,
    req: web::Json<PortfolioPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.replace.execute(req.into_inner()).await {
        Ok(_) => ApiResponse::success(ReplacePortfolioResponse {
            message: "Portfolio updated successfully".to_string(),
        }),

        Err(ReplacePortfolioError::InvalidFormat(_)) => {
            ApiResponse::bad_request("INVALID_FORMAT", "Invalid data format")
        }

        Err(ReplacePortfolioError::RepositoryError(msg)) => {
            error!(subject = %session.subject, "Failed to replace portfolio: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::extractors::SESSION_COOKIE_NAME;
    use crate::modules::portfolio::application::service::{
        GetPortfolioService, ReplacePortfolioService,
    };
    use crate::modules::portfolio::domain::default_portfolio;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, session_token, test_token_provider};
    use crate::tests::support::in_memory_portfolio_repository::InMemoryPortfolioRepository;
    use crate::tests::support::portfolio_fixtures::sample_portfolio;
    use actix_web::cookie::Cookie;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state_over(repo: Arc<InMemoryPortfolioRepository>) -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_get_portfolio(GetPortfolioService::new(repo.clone()))
            .with_replace_portfolio(ReplacePortfolioService::new(repo))
            .build()
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data(test_token_provider())
                    .app_data(custom_json_config())
                    .service(replace_portfolio_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_admin_replace_persists_document() {
        let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
        let state = state_over(repo.clone());
        let app = init_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .insert_header(bearer_header())
            .set_json(sample_portfolio())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Portfolio updated successfully");

        let stored = state.portfolio.get.execute().await.unwrap();
        assert_eq!(stored, sample_portfolio());
    }

    #[actix_web::test]
    async fn test_session_cookie_is_accepted() {
        let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
        let app = init_app!(state_over(repo.clone()));

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .cookie(Cookie::new(SESSION_COOKIE_NAME, session_token()))
            .set_json(sample_portfolio())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(repo.snapshot(), Some(sample_portfolio()));
    }

    #[actix_web::test]
    async fn test_anonymous_replace_is_rejected_and_store_untouched() {
        let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
        let app = init_app!(state_over(repo.clone()));

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .set_json(sample_portfolio())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(repo.replace_calls(), 0);
        assert_eq!(repo.snapshot(), Some(default_portfolio()));
    }

    #[actix_web::test]
    async fn test_missing_name_is_invalid_format() {
        let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
        let app = init_app!(state_over(repo.clone()));

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .insert_header(bearer_header())
            .set_json(json!({ "title": "No name", "projects": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_FORMAT");
        assert_eq!(body["error"]["message"], "Invalid data format");
        assert_eq!(repo.snapshot(), Some(default_portfolio()));
    }

    #[actix_web::test]
    async fn test_missing_projects_is_invalid_format() {
        let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
        let app = init_app!(state_over(repo));

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .insert_header(bearer_header())
            .set_json(json!({ "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_FORMAT");
    }

    #[actix_web::test]
    async fn test_wrong_typed_required_fields_are_invalid_format() {
        let bodies = [
            json!({ "name": "Ada", "projects": "oops" }),
            json!({ "name": "Ada", "projects": {} }),
            json!({ "name": 42, "projects": [] }),
        ];

        for body in bodies {
            let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
            let app = init_app!(state_over(repo.clone()));

            let req = test::TestRequest::post()
                .uri("/api/portfolio")
                .insert_header(bearer_header())
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body = {body}");
            let json: Value = test::read_body_json(resp).await;
            assert_eq!(json["error"]["code"], "INVALID_FORMAT", "body = {body}");
            assert_eq!(repo.replace_calls(), 0);
            assert_eq!(repo.snapshot(), Some(default_portfolio()));
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let repo = Arc::new(InMemoryPortfolioRepository::with(default_portfolio()));
        let app = init_app!(state_over(repo));

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .insert_header(bearer_header())
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_storage_failure_is_500() {
        let repo = Arc::new(InMemoryPortfolioRepository::failing_replace(default_portfolio()));
        let app = init_app!(state_over(repo.clone()));

        let req = test::TestRequest::post()
            .uri("/api/portfolio")
            .insert_header(bearer_header())
            .set_json(sample_portfolio())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(repo.snapshot(), Some(default_portfolio()));
    }
}
