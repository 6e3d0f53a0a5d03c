use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::outgoing::{ContactSink, ContactSinkError};
use crate::modules::contact::domain::ContactMessage;

/// Records submissions in the application log only. Used when no SMTP relay
/// is configured.
#[derive(Debug, Clone, Default)]
pub struct LoggingContactSink;

#[async_trait]
impl ContactSink for LoggingContactSink {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactSinkError> {
        info!(
            name = %message.name(),
            email = %message.email(),
            message = %message.message(),
            "Contact form submission"
        );
        Ok(())
    }
}
