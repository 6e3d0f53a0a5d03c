use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactSink;
use crate::modules::contact::domain::ContactMessage;

pub struct SubmitContactService {
    sink: Arc<dyn ContactSink>,
}

impl SubmitContactService {
    pub fn new(sink: Arc<dyn ContactSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, message: ContactMessage) -> Result<(), SubmitContactError> {
        self.sink.deliver(&message).await.map_err(|e| {
            error!(from = %message.email(), "Contact delivery failed: {}", e);
            SubmitContactError::DeliveryFailed(e.to_string())
        })
    }
}
