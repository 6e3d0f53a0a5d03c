use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SummaryGeneratorError {
    #[error("No text generation backend configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Generator returned empty content")]
    EmptyContent,
}

/// Text generation backend: prompt in, completion out.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SummaryGeneratorError>;
}
