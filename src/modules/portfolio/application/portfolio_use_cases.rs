use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, ReplacePortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplacePortfolioUseCase + Send + Sync>,
}
