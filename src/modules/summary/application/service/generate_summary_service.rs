use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::summary::application::ports::incoming::use_cases::{
    GenerateSummaryError, GenerateSummaryUseCase,
};
use crate::modules::summary::application::ports::outgoing::{
    SummaryGenerator, SummaryGeneratorError,
};
use crate::modules::summary::domain::{build_prompt, SummaryInput};

pub struct GenerateSummaryService {
    generator: Arc<dyn SummaryGenerator>,
}

impl GenerateSummaryService {
    pub fn new(generator: Arc<dyn SummaryGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl GenerateSummaryUseCase for GenerateSummaryService {
    async fn execute(&self, input: SummaryInput) -> Result<String, GenerateSummaryError> {
        let prompt = build_prompt(&input);

        let text = self.generator.generate(&prompt).await.map_err(|e| {
            if !matches!(e, SummaryGeneratorError::NotConfigured) {
                error!("Summary generation failed: {}", e);
            }
            GenerateSummaryError::from(e)
        })?;

        let summary = text.trim().to_string();
        if summary.is_empty() {
            return Err(GenerateSummaryError::GenerationFailed(
                SummaryGeneratorError::EmptyContent.to_string(),
            ));
        }

        info!(chars = summary.len(), "Portfolio summary generated");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub GeneratorMock {}
        #[async_trait]
        impl SummaryGenerator for GeneratorMock {
            async fn generate(&self, prompt: &str) -> Result<String, SummaryGeneratorError>;
        }
    }

    fn input() -> SummaryInput {
        SummaryInput {
            name: "Ada".to_string(),
            skills: vec!["Math".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn returns_trimmed_generator_text() {
        let mut generator = MockGeneratorMock::new();
        generator
            .expect_generate()
            .withf(|p: &str| p.contains("Name: Ada"))
            .times(1)
            .returning(|_| Ok("  A concise summary.\n".to_string()));
        let service = GenerateSummaryService::new(Arc::new(generator));

        let res = service.execute(input()).await.unwrap();

        assert_eq!(res, "A concise summary.");
    }

    #[tokio::test]
    async fn missing_backend_maps_to_unavailable() {
        let mut generator = MockGeneratorMock::new();
        generator
            .expect_generate()
            .returning(|_| Err(SummaryGeneratorError::NotConfigured));
        let service = GenerateSummaryService::new(Arc::new(generator));

        let res = service.execute(input()).await;

        assert!(matches!(res, Err(GenerateSummaryError::Unavailable)));
    }

    #[tokio::test]
    async fn upstream_error_maps_to_generation_failed() {
        let mut generator = MockGeneratorMock::new();
        generator.expect_generate().returning(|_| {
            Err(SummaryGeneratorError::Api {
                status: 500,
                message: "overloaded".to_string(),
            })
        });
        let service = GenerateSummaryService::new(Arc::new(generator));

        let res = service.execute(input()).await;

        assert!(matches!(
            res,
            Err(GenerateSummaryError::GenerationFailed(msg)) if msg.contains("overloaded")
        ));
    }

    #[tokio::test]
    async fn blank_answer_maps_to_generation_failed() {
        let mut generator = MockGeneratorMock::new();
        generator
            .expect_generate()
            .returning(|_| Ok("   ".to_string()));
        let service = GenerateSummaryService::new(Arc::new(generator));

        let res = service.execute(input()).await;

        assert!(matches!(res, Err(GenerateSummaryError::GenerationFailed(_))));
    }
}
