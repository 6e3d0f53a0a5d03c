use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactSinkError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Where contact form submissions end up.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactSinkError>;
}
