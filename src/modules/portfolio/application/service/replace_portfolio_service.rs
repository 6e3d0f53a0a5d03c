use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::{PortfolioData, PortfolioPayload};

pub struct ReplacePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> ReplacePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplacePortfolioUseCase for ReplacePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        payload: PortfolioPayload,
    ) -> Result<PortfolioData, ReplacePortfolioError> {
        let data = payload.validate().map_err(|e| {
            warn!("Rejected portfolio replacement: {}", e);
            ReplacePortfolioError::from(e)
        })?;

        self.repository.replace(&data).await.map_err(|e| {
            error!("Portfolio replacement failed: {}", e);
            ReplacePortfolioError::from(e)
        })?;

        info!(
            skills = data.skills.len(),
            projects = data.projects.len(),
            experiences = data.experiences.len(),
            educations = data.educations.len(),
            "Portfolio replaced"
        );

        Ok(data)
    }
}
