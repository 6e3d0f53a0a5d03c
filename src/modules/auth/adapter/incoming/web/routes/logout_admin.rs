use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::routes::login_admin::session_cookie;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    message: String,
}

/// Admin logout
///
/// Clears the `admin_session` cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cookie cleared", body = inline(SuccessResponse<LogoutResponseBody>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> impl Responder {
    let mut resp = ApiResponse::success(LogoutResponseBody {
        message: "Logged out".to_string(),
    });

    let cookie = session_cookie(String::new(), 0, data.session_cookie_secure);
    if let Err(e) = resp.add_removal_cookie(&cookie) {
        tracing::error!(error = %e, "Failed to clear session cookie");
    }

    info!("Admin logged out");
    resp
}
