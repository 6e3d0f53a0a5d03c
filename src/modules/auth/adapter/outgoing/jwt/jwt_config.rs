/// One week, matching the lifetime of the admin cookie.
pub const DEFAULT_SESSION_EXPIRY: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// HS256 needs at least 32 bytes of key material.
    pub const MIN_SECRET_LEN: usize = 32;
}
