use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_SESSION_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_SESSION_SECRET.to_string(),
        issuer: "portfolio_backend_test".to_string(),
        session_expiry: 3600,
    }
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Token provider in the shape the `AdminSession` extractor looks up.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

pub fn session_token() -> String {
    test_jwt_service()
        .generate_session_token()
        .expect("test session token")
}

pub fn bearer_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", session_token()))
}
