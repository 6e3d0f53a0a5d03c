pub mod portfolio_documents;
pub mod portfolio_educations;
pub mod portfolio_experiences;
pub mod portfolio_projects;
pub mod portfolio_skills;
pub mod portfolios;
