mod get_portfolio;
mod replace_portfolio;

pub use get_portfolio::*;
pub use replace_portfolio::*;
