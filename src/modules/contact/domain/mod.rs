pub mod contact_message;
pub use contact_message::{ContactMessage, ContactValidationError, MAX_MESSAGE_CHARS};
