use async_trait::async_trait;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SubmitContactError>;
}
