use async_trait::async_trait;

use crate::modules::summary::application::ports::outgoing::SummaryGeneratorError;
use crate::modules::summary::domain::SummaryInput;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateSummaryError {
    #[error("Summary generation is not configured")]
    Unavailable,

    #[error("Summary generation failed: {0}")]
    GenerationFailed(String),
}

impl From<SummaryGeneratorError> for GenerateSummaryError {
    fn from(err: SummaryGeneratorError) -> Self {
        match err {
            SummaryGeneratorError::NotConfigured => GenerateSummaryError::Unavailable,
            other => GenerateSummaryError::GenerationFailed(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GenerateSummaryUseCase: Send + Sync {
    async fn execute(&self, input: SummaryInput) -> Result<String, GenerateSummaryError>;
}
