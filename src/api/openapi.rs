use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SESSION_COOKIE_NAME;
use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody,
};
// Portfolio
use crate::modules::portfolio::adapter::incoming::web::routes::ReplacePortfolioResponse;
use crate::modules::portfolio::domain::{
    ContactInfo, Education, Experience, PortfolioData, PortfolioPayload, Project,
};
// Summary
use crate::modules::summary::adapter::incoming::web::routes::SummaryResponse;
use crate::modules::summary::domain::SummaryInput;
// Contact
use crate::modules::contact::adapter::incoming::web::routes::{
    ContactRequestDto, ContactResponseBody,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "API documentation for the single-owner portfolio site",
    ),
    paths(
        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::replace_portfolio_handler,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,

        // Summary endpoints
        crate::modules::summary::adapter::incoming::web::routes::generate_summary_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioData>,
            ErrorResponse,
            ErrorDetail,

            // Portfolio
            PortfolioData,
            PortfolioPayload,
            Project,
            Experience,
            Education,
            ContactInfo,
            ReplacePortfolioResponse,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,

            // Summary
            SummaryInput,
            SummaryResponse,

            // Contact
            ContactRequestDto,
            ContactResponseBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Portfolio document endpoints"),
        (name = "auth", description = "Admin session endpoints"),
        (name = "summary", description = "AI summary suggestion"),
        (name = "contact", description = "Visitor contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "Set by POST /api/auth/login",
                ))),
            );
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token"))
                        .build(),
                ),
            )
        }
    }
}
