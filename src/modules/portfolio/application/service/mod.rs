mod get_portfolio_service;
mod replace_portfolio_service;

pub use get_portfolio_service::GetPortfolioService;
pub use replace_portfolio_service::ReplacePortfolioService;
