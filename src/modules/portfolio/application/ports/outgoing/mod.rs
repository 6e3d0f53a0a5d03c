pub mod portfolio_repository;
pub use portfolio_repository::{PortfolioRepository, PortfolioRepositoryError};
