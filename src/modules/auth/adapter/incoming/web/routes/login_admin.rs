use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SESSION_COOKIE_NAME;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from the admin page
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin password
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session lifetime in seconds
    #[schema(example = 604800)]
    expires_in: i64,
}

pub(crate) fn session_cookie(token: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}

/// Admin login
///
/// Verifies the admin password and sets the `admin_session` cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, session cookie set",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": { "expires_in": 604800 }
            })
        ),
        (
            status = 400,
            description = "Empty password",
            body = ErrorResponse
        ),
        (
            status = 401,
            description = "Invalid password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match LoginRequest::new(req.into_inner().password) {
        Ok(r) => r,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin_use_case.execute(request).await {
        Ok(response) => {
            info!("Admin logged in");

            let mut resp = ApiResponse::success(LoginResponse {
                expires_in: response.expires_in,
            });
            let cookie = session_cookie(
                response.session_token,
                response.expires_in,
                data.session_cookie_secure,
            );
            if let Err(e) = resp.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }
            resp
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Admin login failed: invalid password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
