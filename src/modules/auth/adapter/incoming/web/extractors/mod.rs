pub mod admin_session;
pub use admin_session::{AdminSession, SESSION_COOKIE_NAME};
