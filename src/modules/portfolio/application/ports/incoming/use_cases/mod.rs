mod get_portfolio;
mod replace_portfolio;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use replace_portfolio::{ReplacePortfolioError, ReplacePortfolioUseCase};
