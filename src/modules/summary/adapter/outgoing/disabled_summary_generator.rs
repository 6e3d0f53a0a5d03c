use async_trait::async_trait;

use crate::modules::summary::application::ports::outgoing::{
    SummaryGenerator, SummaryGeneratorError,
};

/// Stand-in when no API key is configured.
#[derive(Debug, Clone, Default)]
pub struct DisabledSummaryGenerator;

#[async_trait]
impl SummaryGenerator for DisabledSummaryGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, SummaryGeneratorError> {
        Err(SummaryGeneratorError::NotConfigured)
    }
}
