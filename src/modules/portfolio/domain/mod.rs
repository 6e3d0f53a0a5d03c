pub mod defaults;
pub mod entities;
pub mod payload;

pub use defaults::default_portfolio;
pub use entities::{ContactInfo, Education, Experience, PortfolioData, Project, PORTFOLIO_ID};
pub use payload::{PayloadError, PortfolioPayload};
